//! HTTP adapter for order endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutItemRequest, CheckoutRequest, OrderItemResponse, OrderResponse, OrderSummaryResponse};
pub use handlers::OrderHandlers;
pub use routes::order_routes;
