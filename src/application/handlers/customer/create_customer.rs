//! CreateCustomer - Command handler for registering customers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::customer::{Customer, CustomerError};
use crate::domain::foundation::RepositoryError;
use crate::ports::CustomerRepository;

/// Command to register a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub cpf: String,
    pub email: String,
}

/// Projection of a stored customer returned by the customer handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub cpf: String,
    pub email: String,
}

impl CustomerDetails {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            external_id: customer.external_id().to_string(),
            created_at: *customer.created_at().as_datetime(),
            name: customer.name().to_string(),
            cpf: customer.cpf().as_str().to_string(),
            email: customer.email().as_str().to_string(),
        }
    }
}

/// Handler for registering customers.
pub struct CreateCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomerCommand,
    ) -> Result<CustomerDetails, CustomerError> {
        let customer = Customer::new(&cmd.name, &cmd.cpf, &cmd.email)?;

        let stored = match self.repository.insert(&customer).await {
            Ok(stored) => stored,
            Err(RepositoryError::DuplicateKey) => return Err(CustomerError::AlreadyExists),
            Err(err) => return Err(err.into()),
        };

        Ok(CustomerDetails::from_customer(&stored))
    }
}
