//! Customer domain errors.

use std::collections::HashMap;
use thiserror::Error;

use crate::domain::foundation::{RepositoryError, ValidationError};

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A customer with the same CPF (or external id) already exists.
    #[error("Customer already exists")]
    AlreadyExists,

    /// No customer matched; carries the parameters that were searched.
    #[error("Customer not found")]
    NotFound { search_params: HashMap<String, String> },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CustomerError {
    pub fn not_found(key: &str, value: impl Into<String>) -> Self {
        CustomerError::NotFound {
            search_params: HashMap::from([(key.to_string(), value.into())]),
        }
    }
}
