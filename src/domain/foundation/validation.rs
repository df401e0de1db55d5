//! Validation framework: collect-all field violations.
//!
//! Every construction path reports the full set of violated rules, never just
//! the first one. `ValidationResult` is the accumulator threaded through
//! two-phase aggregate factories; `ValidationError` is what callers see.

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// A single violated rule, addressed by the path to the offending field.
///
/// Nested constructions extend the path: an invalid quantity on the third
/// order item surfaces as `["items", "2", "quantity"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    #[serde(rename = "msg")]
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for a single top-level field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            loc: vec![field.into()],
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.message)
    }
}

/// Outcome of running a set of validation rules.
///
/// Valid iff no violation was recorded. Rules are always evaluated eagerly
/// and fully; results from nested value objects merge in via [`collect`].
///
/// [`collect`]: ValidationResult::collect
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    violations: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Records an optional violation, as produced by the rule functions.
    pub fn apply(&mut self, violation: Option<FieldViolation>) {
        if let Some(violation) = violation {
            self.violations.push(violation);
        }
    }

    /// Merges another result's violations into this one.
    pub fn extend(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    /// Merges a nested construction result, keeping the value on success.
    ///
    /// Returns `None` when the nested construction failed; its violations are
    /// recorded here so the caller keeps accumulating instead of bailing out.
    pub fn collect<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.violations.extend(error.violations);
                None
            }
        }
    }

    /// Finishes a two-phase construction: the value is released only when no
    /// rule was violated.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self.into_error())
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }
}

/// One or more field-level violations raised by a failed construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates an error carrying a single violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Re-addresses every violation to the given top-level field.
    ///
    /// Used when a value object's canonical field name (`id`, `external_id`)
    /// differs from the field it occupies in the enclosing aggregate.
    pub fn at(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        for violation in &mut self.violations {
            violation.loc = vec![field.clone()];
        }
        self
    }

    /// Prepends path segments to every violation, for nested constructions.
    pub fn within(mut self, prefix: &[&str]) -> Self {
        for violation in &mut self.violations {
            let mut loc: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
            loc.append(&mut violation.loc);
            violation.loc = loc;
        }
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{count} validation error{plural}")?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// A validator over some input type.
///
/// `validate` reports every violated rule; the provided `check` converts the
/// result into an error for `?`-style propagation.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult;

    fn check(&self, value: &T) -> Result<(), ValidationError> {
        self.validate(value).into_result(())
    }
}
