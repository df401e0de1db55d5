//! HTTP routes for order endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{checkout, list_orders, OrderHandlers};

/// Creates the order router with all endpoints.
pub fn order_routes(handlers: OrderHandlers) -> Router {
    Router::new()
        .route("/", get(list_orders))
        .route("/checkout", post(checkout))
        .with_state(handlers)
}
