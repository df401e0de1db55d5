//! HTTP routes for customer endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_customer, get_customer_by_cpf, CustomerHandlers};

/// Creates the customer router with all endpoints.
pub fn customer_routes(handlers: CustomerHandlers) -> Router {
    Router::new()
        .route("/", post(create_customer))
        .route("/:cpf", get(get_customer_by_cpf))
        .with_state(handlers)
}
