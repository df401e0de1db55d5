//! Identifier value objects.
//!
//! `EntityId` is the storage-native internal identifier (24-character hex,
//! the document store's id format); it never leaves the backend. `ExternalId`
//! is the UUID exposed to API consumers.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::validation::ValidationError;

const ENTITY_ID_LEN: usize = 24;

const INVALID_ID_MESSAGE: &str = "ID inválido";

/// Internal identifier, matching the persistence layer's native id format.
///
/// Never chosen by callers beyond echoing an existing one; absent until an
/// aggregate is first persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Parses a storage-native id, rejecting anything that is not
    /// 24 hex characters.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.len() == ENTITY_ID_LEN && input.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::single("id", INVALID_ID_MESSAGE))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// API-facing identifier: a UUID, freshly generated when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalId(Uuid);

impl ExternalId {
    /// Creates a new random ExternalId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an ExternalId from its textual UUID form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| ValidationError::single("external_id", INVALID_ID_MESSAGE))
    }

    /// Creates an ExternalId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExternalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExternalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_accepts_object_id_format() {
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn entity_id_rejects_wrong_length() {
        assert!(EntityId::parse("507f1f77").is_err());
        assert!(EntityId::parse("").is_err());
        assert!(EntityId::parse("507f1f77bcf86cd79943901100").is_err());
    }

    #[test]
    fn entity_id_rejects_non_hex() {
        let result = EntityId::parse("zzzf1f77bcf86cd799439011");
        let error = result.unwrap_err();
        assert_eq!(error.violations[0].loc, vec!["id"]);
        assert_eq!(error.violations[0].message, "ID inválido");
    }

    #[test]
    fn entity_id_equality_is_structural() {
        let a = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        let b = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn external_id_generates_unique_values() {
        assert_ne!(ExternalId::new(), ExternalId::new());
    }

    #[test]
    fn external_id_parses_valid_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ExternalId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn external_id_rejects_malformed_input() {
        let error = ExternalId::parse("not-a-uuid").unwrap_err();
        assert_eq!(error.violations[0].loc, vec!["external_id"]);
    }

    #[test]
    fn external_id_round_trips_through_display() {
        let id = ExternalId::new();
        let reparsed = ExternalId::parse(&id.to_string()).unwrap();
        assert_eq!(id, reparsed);
    }
}
