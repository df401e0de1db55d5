//! Order line item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AggregateMeta, EntityId, ExternalId, Timestamp, ValidationError, ValidationResult, Validator,
};

use super::validator::{OrderItemFields, OrderItemValidator};

/// One line of an order: a product, how many, and the unit value resolved at
/// checkout time.
///
/// Items are owned by their order and never mutated in place; changing an
/// order means replacing its item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    meta: AggregateMeta,
    product_id: String,
    quantity: u32,
    value: f64,
}

impl OrderItem {
    /// Builds a new item. Quantity must be positive and the unit value
    /// non-negative; every violation is reported.
    pub fn new(product_id: &str, quantity: u32, value: f64) -> Result<Self, ValidationError> {
        Self::assemble(AggregateMeta::generate(), product_id, quantity, value)
    }

    /// Rebuilds an item from its persistence record.
    pub fn restore(record: OrderItemRecord) -> Result<Self, ValidationError> {
        let mut result = ValidationResult::new();
        let meta = result.collect(AggregateMeta::restore(
            record.id.as_deref(),
            &record.external_id,
            record.created_at,
        ));
        result.extend(OrderItemValidator.validate(&OrderItemFields {
            product_id: &record.product_id,
            quantity: record.quantity,
            value: record.value,
        }));

        match meta {
            Some(meta) if result.is_valid() => Ok(Self {
                meta,
                product_id: record.product_id,
                quantity: record.quantity,
                value: record.value,
            }),
            _ => Err(result.into_error()),
        }
    }

    fn assemble(
        meta: AggregateMeta,
        product_id: &str,
        quantity: u32,
        value: f64,
    ) -> Result<Self, ValidationError> {
        let fields = OrderItemFields {
            product_id,
            quantity,
            value,
        };
        OrderItemValidator.check(&fields)?;
        Ok(Self {
            meta,
            product_id: product_id.to_string(),
            quantity,
            value,
        })
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

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit value resolved from the product catalog at checkout time.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// This line's contribution to the order total.
    pub fn subtotal(&self) -> f64 {
        self.value * f64::from(self.quantity)
    }

    pub fn to_record(&self) -> OrderItemRecord {
        OrderItemRecord {
            id: self.meta.id.as_ref().map(|id| id.as_str().to_string()),
            external_id: self.meta.external_id.to_string(),
            created_at: *self.meta.created_at.as_datetime(),
            product_id: self.product_id.clone(),
            quantity: self.quantity,
            value: self.value,
        }
    }
}

/// Flat persistence representation of an [`OrderItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: Option<String>,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub product_id: String,
    pub quantity: u32,
    pub value: f64,
}
