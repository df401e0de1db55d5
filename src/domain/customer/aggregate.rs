//! Customer aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AggregateMeta, Cpf, EmailAddress, EntityId, ExternalId, Timestamp, ValidationError,
    ValidationResult, Validator,
};

use super::validator::{CustomerFields, CustomerValidator};

/// A registered customer: identity plus name, CPF, and email.
///
/// Immutable after construction. Both factories report every violated field,
/// never just the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    meta: AggregateMeta,
    name: String,
    cpf: Cpf,
    email: EmailAddress,
}

impl Customer {
    /// Builds a new customer from raw input.
    ///
    /// The name is trimmed before the 3–150 character rule applies; CPF and
    /// email validate themselves. All violations accumulate into one error.
    pub fn new(name: &str, cpf: &str, email: &str) -> Result<Self, ValidationError> {
        Self::assemble(AggregateMeta::generate(), name, cpf, email)
    }

    /// Rebuilds a customer from its persistence record, re-validating every
    /// field, identity included.
    pub fn restore(record: CustomerRecord) -> Result<Self, ValidationError> {
        let mut result = ValidationResult::new();
        let meta = result.collect(AggregateMeta::restore(
            record.id.as_deref(),
            &record.external_id,
            record.created_at,
        ));

        match Self::assemble_into(&mut result, meta, &record.name, &record.cpf, &record.email) {
            Some(customer) => result.into_result(customer),
            None => Err(result.into_error()),
        }
    }

    fn assemble(
        meta: AggregateMeta,
        name: &str,
        cpf: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let mut result = ValidationResult::new();
        match Self::assemble_into(&mut result, Some(meta), name, cpf, email) {
            Some(customer) => result.into_result(customer),
            None => Err(result.into_error()),
        }
    }

    /// Runs the combined validator over candidate fields, yielding the
    /// aggregate only when everything held.
    fn assemble_into(
        result: &mut ValidationResult,
        meta: Option<AggregateMeta>,
        name: &str,
        cpf: &str,
        email: &str,
    ) -> Option<Self> {
        let name = name.trim().to_string();
        result.extend(CustomerValidator.validate(&CustomerFields { name: &name }));

        let cpf = result.collect(Cpf::new(cpf));
        let email = result.collect(EmailAddress::new(email));

        match (meta, cpf, email) {
            (Some(meta), Some(cpf), Some(email)) if result.is_valid() => Some(Self {
                meta,
                name,
                cpf,
                email,
            }),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.meta.id.as_ref()
    }

    pub fn external_id(&self) -> &ExternalId {
        &self.meta.external_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.meta.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The persistence representation of this customer.
    pub fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            id: self.meta.id.as_ref().map(|id| id.as_str().to_string()),
            external_id: self.meta.external_id.to_string(),
            created_at: *self.meta.created_at.as_datetime(),
            name: self.name.clone(),
            cpf: self.cpf.as_str().to_string(),
            email: self.email.as_str().to_string(),
        }
    }
}

/// Flat persistence representation of a [`Customer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: Option<String>,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub cpf: String,
    pub email: String,
}
