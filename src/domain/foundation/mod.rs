//! Foundation module - shared domain primitives.
//!
//! Value objects, identifiers, the validation framework, and error types
//! that form the vocabulary of the storefront domain.

mod aggregate;
mod cpf;
mod email;
mod errors;
mod ids;
pub mod rules;
mod state_machine;
mod timestamp;
mod validation;

pub use aggregate::AggregateMeta;
pub use cpf::Cpf;
pub use email::EmailAddress;
pub use errors::{ExternalServiceError, RepositoryError};
pub use ids::{EntityId, ExternalId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use validation::{FieldViolation, ValidationError, ValidationResult, Validator};
