//! GetCustomerByCpf - Query handler for looking customers up by CPF.

use std::sync::Arc;

use crate::domain::customer::CustomerError;
use crate::domain::foundation::Cpf;
use crate::ports::CustomerRepository;

use super::create_customer::CustomerDetails;

/// Handler for CPF lookups.
pub struct GetCustomerByCpfHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerByCpfHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Looks up a customer by CPF. The raw input is validated first, so
    /// a malformed CPF is a validation error rather than a miss.
    pub async fn handle(&self, cpf: &str) -> Result<CustomerDetails, CustomerError> {
        let cpf = Cpf::new(cpf)?;

        match self.repository.find_by_cpf(&cpf).await? {
            Some(customer) => Ok(CustomerDetails::from_customer(&customer)),
            None => Err(CustomerError::not_found("cpf", cpf.as_str())),
        }
    }
}
