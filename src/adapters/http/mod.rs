//! HTTP adapters: routers, handlers, DTOs, and error mapping.

pub mod app;
pub mod customer;
pub mod error;
pub mod health;
pub mod order;

pub use app::{build_router, AppServices};
pub use error::ApiError;
