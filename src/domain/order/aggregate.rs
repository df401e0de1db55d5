//! Order aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AggregateMeta, EntityId, ExternalId, StateMachine, Timestamp, ValidationError,
    ValidationResult, Validator,
};

use super::errors::OrderError;
use super::item::{OrderItem, OrderItemRecord};
use super::status::OrderStatus;
use super::validator::{OrderFields, OrderValidator};

/// An order owned by a customer: line items, a computed total, and a
/// lifecycle status.
///
/// The order owns its items (they have no life outside it) and references
/// the customer by internal id only. `total_value` always equals
/// Σ quantity × value over the current items; it is recomputed after
/// construction and on every item mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    meta: AggregateMeta,
    customer_id: EntityId,
    items: Vec<OrderItem>,
    total_value: f64,
    status: OrderStatus,
}

impl Order {
    /// Builds a new order in `PaymentPending` with its total computed.
    pub fn new(customer_id: EntityId, items: Vec<OrderItem>) -> Result<Self, ValidationError> {
        let mut order = Self {
            meta: AggregateMeta::generate(),
            customer_id,
            items,
            total_value: 0.0,
            status: OrderStatus::PaymentPending,
        };
        order.total_value = order.calculate_total();
        OrderValidator.check(&OrderFields {
            total_value: order.total_value,
        })?;
        Ok(order)
    }

    /// Rebuilds an order from its persistence record.
    ///
    /// Identity, customer id, the stored total, and every item are all
    /// re-validated; violations accumulate across all of them. The total is
    /// then recomputed from the restored items, keeping the invariant even if
    /// the stored figure drifted.
    pub fn restore(record: OrderRecord) -> Result<Self, ValidationError> {
        let mut result = ValidationResult::new();

        let meta = result.collect(AggregateMeta::restore(
            record.id.as_deref(),
            &record.external_id,
            record.created_at,
        ));
        let customer_id = result.collect(
            EntityId::parse(&record.customer_id).map_err(|e| e.at("customer_id")),
        );
        result.extend(OrderValidator.validate(&OrderFields {
            total_value: record.total_value,
        }));

        let items: Vec<Option<OrderItem>> = record
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let index = index.to_string();
                result.collect(OrderItem::restore(item).map_err(|e| e.within(&["items", &index])))
            })
            .collect();
        let items: Option<Vec<OrderItem>> = items.into_iter().collect();

        match (meta, customer_id, items) {
            (Some(meta), Some(customer_id), Some(items)) if result.is_valid() => {
                let mut order = Self {
                    meta,
                    customer_id,
                    items,
                    total_value: 0.0,
                    status: record.status,
                };
                order.total_value = order.calculate_total();
                Ok(order)
            }
            _ => Err(result.into_error()),
        }
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.meta.id.as_ref()
    }

    pub fn external_id(&self) -> &ExternalId {
        &self.meta.external_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.meta.created_at
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Appends an item and recomputes the total.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
        self.total_value = self.calculate_total();
    }

    /// Removes the item with the given internal id (if present) and
    /// recomputes the total.
    pub fn remove_item(&mut self, item_id: &EntityId) {
        self.items.retain(|item| item.id() != Some(item_id));
        self.total_value = self.calculate_total();
    }

    /// Σ quantity × value over current items; zero for an empty order.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Moves the order to `new_status` if the transition table allows it.
    pub fn update_status(&mut self, new_status: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(&new_status) {
            return Err(OrderError::InvalidStatusTransition {
                from: self.status,
                to: new_status,
            });
        }
        self.status = new_status;
        Ok(())
    }

    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.meta.id.as_ref().map(|id| id.as_str().to_string()),
            external_id: self.meta.external_id.to_string(),
            created_at: *self.meta.created_at.as_datetime(),
            customer_id: self.customer_id.as_str().to_string(),
            items: self.items.iter().map(OrderItem::to_record).collect(),
            total_value: self.total_value,
            status: self.status,
        }
    }
}

/// Flat persistence representation of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Option<String>,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub items: Vec<OrderItemRecord>,
    pub total_value: f64,
    pub status: OrderStatus,
}
