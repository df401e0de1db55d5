//! Structural field rules and their localized messages.
//!
//! Each rule is an eager, pure function returning the violation for one field,
//! or `None` when the rule holds. Messages come from a static kind → template
//! table, mirroring the wording users of the reference deployment see.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::validation::FieldViolation;

/// The kind of structural rule that was violated.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    Missing,
    StringTooShort { min: usize },
    StringTooLong { max: usize },
    GreaterThan { limit: f64 },
    GreaterThanEqual { limit: f64 },
}

impl RuleKind {
    fn key(&self) -> &'static str {
        match self {
            RuleKind::Missing => "missing",
            RuleKind::StringTooShort { .. } => "string_too_short",
            RuleKind::StringTooLong { .. } => "string_too_long",
            RuleKind::GreaterThan { .. } => "greater_than",
            RuleKind::GreaterThanEqual { .. } => "greater_than_equal",
        }
    }

    /// Renders the localized message for this kind, filling in its bounds.
    pub fn message(&self) -> String {
        let template = MESSAGES.get(self.key()).copied().unwrap_or(FALLBACK_MESSAGE);
        match self {
            RuleKind::Missing => template.to_string(),
            RuleKind::StringTooShort { min } => template.replace("{min}", &min.to_string()),
            RuleKind::StringTooLong { max } => template.replace("{max}", &max.to_string()),
            RuleKind::GreaterThan { limit } => template.replace("{limit}", &format_bound(*limit)),
            RuleKind::GreaterThanEqual { limit } => {
                template.replace("{limit}", &format_bound(*limit))
            }
        }
    }
}

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("missing", "Campo obrigatório"),
        ("string_too_short", "Deve possuir pelo menos {min} caracteres"),
        ("string_too_long", "Deve possuir no máximo {max} caracteres"),
        ("greater_than", "Deve ser maior que {limit}"),
        ("greater_than_equal", "Deve ser maior ou igual a {limit}"),
    ])
});

/// Fallback for kinds the table does not cover.
const FALLBACK_MESSAGE: &str = "Valor inválido";

/// Integral bounds render without a trailing `.0`.
fn format_bound(limit: f64) -> String {
    if limit.fract() == 0.0 {
        format!("{}", limit as i64)
    } else {
        format!("{limit}")
    }
}

fn violation(field: &str, kind: RuleKind) -> FieldViolation {
    FieldViolation::new(field, kind.message())
}

/// The field must be non-empty (after trimming).
pub fn require_present(field: &str, value: &str) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        Some(violation(field, RuleKind::Missing))
    } else {
        None
    }
}

/// The trimmed string length must fall within `min..=max` characters.
pub fn require_str_length(field: &str, value: &str, min: usize, max: usize) -> Option<FieldViolation> {
    let len = value.trim().chars().count();
    if len < min {
        Some(violation(field, RuleKind::StringTooShort { min }))
    } else if len > max {
        Some(violation(field, RuleKind::StringTooLong { max }))
    } else {
        None
    }
}

/// The value must be strictly greater than `limit`.
pub fn require_gt(field: &str, value: f64, limit: f64) -> Option<FieldViolation> {
    if value > limit {
        None
    } else {
        Some(violation(field, RuleKind::GreaterThan { limit }))
    }
}

/// The value must be greater than or equal to `limit`.
pub fn require_ge(field: &str, value: f64, limit: f64) -> Option<FieldViolation> {
    if value >= limit {
        None
    } else {
        Some(violation(field, RuleKind::GreaterThanEqual { limit }))
    }
}
