//! HTTP adapter for customer endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateCustomerRequest, CustomerResponse};
pub use handlers::CustomerHandlers;
pub use routes::customer_routes;
