//! CustomerRepository port for customer persistence operations

use async_trait::async_trait;

use crate::domain::customer::Customer;
use crate::domain::foundation::{Cpf, EntityId, ExternalId, RepositoryError};

/// Repository for persisting and looking up customers.
///
/// `insert` returns the stored customer so adapters can report the
/// internal id they assigned. Lookups return `Ok(None)` for a plain
/// miss; `RepositoryError` is reserved for backend failures and
/// uniqueness conflicts.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer, assigning its internal id.
    ///
    /// Fails with [`RepositoryError::DuplicateKey`] when the CPF or
    /// email is already taken.
    async fn insert(&self, customer: &Customer) -> Result<Customer, RepositoryError>;

    /// Find the first customer matching every provided filter. A
    /// filter left as `None` does not constrain the lookup.
    async fn find(
        &self,
        cpf: Option<&Cpf>,
        email: Option<&str>,
    ) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, RepositoryError> {
        self.find(Some(cpf), None).await
    }
}
