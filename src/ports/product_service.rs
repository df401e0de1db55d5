//! ProductService port for the upstream catalog.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::foundation::ExternalServiceError;

/// A catalog product as reported by the upstream service. Prices are
/// resolved here at checkout time, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Client for the external product catalog.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Fetch the products with the given ids in one round of lookups.
    ///
    /// Ids unknown to the catalog are simply absent from the result;
    /// callers decide whether a missing product is an error.
    async fn fetch_products_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<Product>, ExternalServiceError>;
}
