//! HTTP DTOs for order endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::order::{
    CheckedOutItem, CheckedOutOrder, CheckoutItem, OrderSummary,
};
use crate::domain::order::OrderStatus;

/// Request to place an order. Prices are looked up server-side; the
/// caller only names products and quantities.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: String,
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl From<CheckoutItemRequest> for CheckoutItem {
    fn from(req: CheckoutItemRequest) -> Self {
        Self {
            product_id: req.product_id,
            quantity: req.quantity,
        }
    }
}

/// A freshly placed order, with its catalog-resolved prices.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub status: OrderStatus,
    pub total_value: f64,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub quantity: u32,
    pub value: f64,
}

impl From<CheckedOutOrder> for OrderResponse {
    fn from(order: CheckedOutOrder) -> Self {
        Self {
            id: order.external_id,
            created_at: order.created_at,
            customer_id: order.customer_id,
            status: order.status,
            total_value: order.total_value,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CheckedOutItem> for OrderItemResponse {
    fn from(item: CheckedOutItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            value: item.value,
        }
    }
}

/// One row in the order listing.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummaryResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub status: OrderStatus,
    pub total_value: f64,
    pub item_count: usize,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            id: summary.external_id,
            created_at: summary.created_at,
            customer_id: summary.customer_id,
            status: summary.status,
            total_value: summary.total_value,
            item_count: summary.item_count,
        }
    }
}
