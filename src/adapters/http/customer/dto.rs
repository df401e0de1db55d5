//! HTTP DTOs for customer endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::customer::CustomerDetails;

/// Request to register a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub cpf: String,
    pub email: String,
}

/// A stored customer, keyed by its public UUID.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub cpf: String,
    pub email: String,
}

impl From<CustomerDetails> for CustomerResponse {
    fn from(details: CustomerDetails) -> Self {
        Self {
            id: details.external_id,
            created_at: details.created_at,
            name: details.name,
            cpf: details.cpf,
            email: details.email,
        }
    }
}
