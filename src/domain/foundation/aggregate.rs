//! Aggregate identity shared by every aggregate root.
//!
//! Aggregates are built through two-phase factories: candidate fields are
//! assembled, every rule runs, and the value is released only when no rule
//! was violated. `AggregateMeta` carries the identity part of that contract.

use chrono::{DateTime, Utc};

use super::ids::{EntityId, ExternalId};
use super::timestamp::Timestamp;
use super::validation::{ValidationError, ValidationResult};

/// Identity and audit fields common to Customer, Order, and OrderItem.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateMeta {
    /// Internal identifier; absent until the aggregate is first persisted.
    pub id: Option<EntityId>,
    /// API-facing identifier, always present.
    pub external_id: ExternalId,
    /// Creation instant.
    pub created_at: Timestamp,
}

impl AggregateMeta {
    /// Fresh identity for a new aggregate: no internal id yet, generated
    /// external id, creation time now.
    pub fn generate() -> Self {
        Self {
            id: None,
            external_id: ExternalId::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Rebuilds identity from a persistence record.
    ///
    /// Both identifier formats are re-validated and every violation is
    /// reported together, matching the aggregate-wide policy.
    pub fn restore(
        id: Option<&str>,
        external_id: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let mut result = ValidationResult::new();

        let id = match id {
            Some(raw) => result.collect(EntityId::parse(raw)),
            None => None,
        };
        let external_id = result.collect(ExternalId::parse(external_id));

        match external_id {
            Some(external_id) if result.is_valid() => Ok(Self {
                id,
                external_id,
                created_at: Timestamp::from_datetime(created_at),
            }),
            _ => Err(result.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_has_no_internal_id() {
        let meta = AggregateMeta::generate();
        assert!(meta.id.is_none());
    }

    #[test]
    fn generate_produces_distinct_external_ids() {
        assert_ne!(
            AggregateMeta::generate().external_id,
            AggregateMeta::generate().external_id
        );
    }

    #[test]
    fn restore_accepts_well_formed_identity() {
        let meta = AggregateMeta::restore(
            Some("507f1f77bcf86cd799439011"),
            "550e8400-e29b-41d4-a716-446655440000",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(meta.id.unwrap().as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn restore_without_internal_id_is_a_new_entity() {
        let meta =
            AggregateMeta::restore(None, "550e8400-e29b-41d4-a716-446655440000", Utc::now())
                .unwrap();
        assert!(meta.id.is_none());
    }

    #[test]
    fn restore_reports_both_identifier_violations_together() {
        let error = AggregateMeta::restore(Some("bad"), "also-bad", Utc::now()).unwrap_err();
        let locs: Vec<_> = error.violations.iter().map(|v| v.loc.clone()).collect();
        assert_eq!(locs, vec![vec!["id"], vec!["external_id"]]);
    }
}
