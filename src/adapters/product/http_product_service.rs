//! HTTP adapter for the upstream product catalog.
//!
//! The catalog exposes one product per `GET {base_url}/products/{id}`;
//! this adapter fans the batched port call out into per-id requests. A
//! 404 from the catalog means the id is unknown and the product is
//! simply left out of the result; any other failure becomes an
//! [`ExternalServiceError`] carrying the upstream status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::foundation::ExternalServiceError;
use crate::ports::{Product, ProductService};

pub struct HttpProductService {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpProductService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url.trim_end_matches('/'), id)
    }

    async fn fetch_product(&self, id: &str) -> Result<Option<Product>, ExternalServiceError> {
        let url = self.product_url(id);

        tracing::debug!("Fetching product from {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Product catalog unreachable: {}", e);
            ExternalServiceError::new(
                format!("Failed to fetch product {id}: {e}"),
                StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            )
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Product catalog returned {} for {}", status, id);
            return Err(ExternalServiceError::new(
                format!("Failed to fetch product {id}"),
                status.as_u16(),
            ));
        }

        let product: Product = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse product payload: {}", e);
            ExternalServiceError::new(
                format!("Failed to parse product {id}: {e}"),
                StatusCode::BAD_GATEWAY.as_u16(),
            )
        })?;

        Ok(Some(product))
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn fetch_products_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<Product>, ExternalServiceError> {
        let mut products = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(product) = self.fetch_product(id).await? {
                products.push(product);
            }
        }
        Ok(products)
    }
}
