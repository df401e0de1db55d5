//! Structural rules for Order and OrderItem fields.

use crate::domain::foundation::{rules, ValidationResult, Validator};

/// Raw order-item fields subject to schema rules.
#[derive(Debug)]
pub(crate) struct OrderItemFields<'a> {
    pub product_id: &'a str,
    pub quantity: u32,
    pub value: f64,
}

pub(crate) struct OrderItemValidator;

impl<'a> Validator<OrderItemFields<'a>> for OrderItemValidator {
    fn validate(&self, fields: &OrderItemFields<'a>) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.apply(rules::require_present("product_id", fields.product_id));
        result.apply(rules::require_gt("quantity", f64::from(fields.quantity), 0.0));
        result.apply(rules::require_ge("value", fields.value, 0.0));
        result
    }
}

/// Order-level fields subject to schema rules; items validate individually.
#[derive(Debug)]
pub(crate) struct OrderFields {
    pub total_value: f64,
}

pub(crate) struct OrderValidator;

impl Validator<OrderFields> for OrderValidator {
    fn validate(&self, fields: &OrderFields) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.apply(rules::require_ge("total_value", fields.total_value, 0.0));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_item_fields_pass() {
        let result = OrderItemValidator.validate(&OrderItemFields {
            product_id: "prod-1",
            quantity: 1,
            value: 0.0,
        });
        assert!(result.is_valid());
    }

    #[test]
    fn every_item_rule_is_checked() {
        let result = OrderItemValidator.validate(&OrderItemFields {
            product_id: " ",
            quantity: 0,
            value: -3.0,
        });
        assert_eq!(result.violations().len(), 3);
    }

    #[test]
    fn negative_total_fails() {
        let result = OrderValidator.validate(&OrderFields { total_value: -0.01 });
        assert_eq!(
            result.violations()[0].message,
            "Deve ser maior ou igual a 0"
        );
    }

    #[test]
    fn zero_total_passes() {
        assert!(OrderValidator.validate(&OrderFields { total_value: 0.0 }).is_valid());
    }
}
