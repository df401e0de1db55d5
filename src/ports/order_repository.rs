//! OrderRepository port for order persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{EntityId, ExternalId, RepositoryError};
use crate::domain::order::Order;

/// Repository for persisting and listing orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order, assigning its internal id.
    async fn insert(&self, order: &Order) -> Result<Order, RepositoryError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Order>, RepositoryError>;

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Order>, RepositoryError>;

    /// All stored orders, oldest first.
    async fn list_all(&self) -> Result<Vec<Order>, RepositoryError>;
}
