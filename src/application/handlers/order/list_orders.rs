//! ListOrders - Query handler returning every stored order.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::foundation::RepositoryError;
use crate::domain::order::{Order, OrderStatus};
use crate::ports::OrderRepository;

/// Read-model projection of a stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub status: OrderStatus,
    pub total_value: f64,
    pub item_count: usize,
}

impl OrderSummary {
    fn from_order(order: &Order) -> Self {
        Self {
            external_id: order.external_id().to_string(),
            created_at: *order.created_at().as_datetime(),
            customer_id: order.customer_id().as_str().to_string(),
            status: order.status(),
            total_value: order.total_value(),
            item_count: order.items().len(),
        }
    }
}

/// Handler listing all orders, oldest first.
pub struct ListOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let orders = self.orders.list_all().await?;
        Ok(orders.iter().map(OrderSummary::from_order).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryOrderRepository;
    use crate::domain::foundation::EntityId;
    use crate::domain::order::OrderItem;

    fn order(product: &str, quantity: u32, value: f64) -> Order {
        Order::new(
            EntityId::parse("507f1f77bcf86cd799439011").unwrap(),
            vec![OrderItem::new(product, quantity, value).unwrap()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListOrdersHandler::new(Arc::new(InMemoryOrderRepository::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_orders_in_insertion_order() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let first = orders.insert(&order("burger", 1, 25.0)).await.unwrap();
        let second = orders.insert(&order("soda", 2, 7.5)).await.unwrap();

        let summaries = ListOrdersHandler::new(orders).handle().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].external_id, first.external_id().to_string());
        assert_eq!(summaries[1].external_id, second.external_id().to_string());
        assert_eq!(summaries[1].total_value, 15.0);
    }
}
