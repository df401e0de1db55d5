//! HTTP handlers for order endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::order::{CheckoutCommand, CheckoutHandler, ListOrdersHandler};

use super::dto::{CheckoutRequest, OrderResponse, OrderSummaryResponse};

#[derive(Clone)]
pub struct OrderHandlers {
    checkout_handler: Arc<CheckoutHandler>,
    list_handler: Arc<ListOrdersHandler>,
}

impl OrderHandlers {
    pub fn new(checkout_handler: Arc<CheckoutHandler>, list_handler: Arc<ListOrdersHandler>) -> Self {
        Self {
            checkout_handler,
            list_handler,
        }
    }
}

/// POST /orders/checkout - Place an order
pub async fn checkout(
    State(handlers): State<OrderHandlers>,
    Json(req): Json<CheckoutRequest>,
) -> Response {
    let cmd = CheckoutCommand {
        customer_id: req.customer_id,
        items: req.items.into_iter().map(Into::into).collect(),
    };

    match handlers.checkout_handler.handle(cmd).await {
        Ok(order) => {
            let response: OrderResponse = order.into();
            let location = format!("/orders/{}", response.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(response),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /orders - List every order
pub async fn list_orders(State(handlers): State<OrderHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(summaries) => {
            let response: Vec<OrderSummaryResponse> =
                summaries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
