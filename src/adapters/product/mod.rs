//! Product catalog adapters.

mod http_product_service;

pub use http_product_service::HttpProductService;
