//! Ports: trait boundaries between the application core and the
//! outside world. Adapters implement these; handlers depend on them
//! through `Arc<dyn Trait>`.

pub mod customer_repository;
pub mod order_repository;
pub mod product_service;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use product_service::{Product, ProductService};
