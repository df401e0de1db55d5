//! Structural rules for Customer fields.
//!
//! CPF and email validate themselves as value objects; what remains at the
//! schema level is the name rule.

use crate::domain::foundation::{rules, ValidationResult, Validator};

pub(crate) const NAME_MIN: usize = 3;
pub(crate) const NAME_MAX: usize = 150;

/// Raw customer fields subject to schema rules.
#[derive(Debug)]
pub(crate) struct CustomerFields<'a> {
    pub name: &'a str,
}

pub(crate) struct CustomerValidator;

impl<'a> Validator<CustomerFields<'a>> for CustomerValidator {
    fn validate(&self, fields: &CustomerFields<'a>) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.apply(rules::require_str_length("name", fields.name, NAME_MIN, NAME_MAX));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_within_bounds_passes() {
        let result = CustomerValidator.validate(&CustomerFields { name: "Ana" });
        assert!(result.is_valid());
    }

    #[test]
    fn name_below_minimum_fails() {
        let result = CustomerValidator.validate(&CustomerFields { name: "An" });
        assert_eq!(result.violations().len(), 1);
        assert_eq!(
            result.violations()[0].message,
            "Deve possuir pelo menos 3 caracteres"
        );
    }

    #[test]
    fn name_above_maximum_fails() {
        let long = "x".repeat(NAME_MAX + 1);
        let result = CustomerValidator.validate(&CustomerFields { name: &long });
        assert!(!result.is_valid());
    }
}
