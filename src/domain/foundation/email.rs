//! Email address value object.

use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

const INVALID_EMAIL_MESSAGE: &str = "Endereço de e-mail inválido.";

/// A syntactically valid email address, compared by value.
///
/// The check is the same simple grammar the reference deployment applies:
/// one `@`, non-empty local part, and a dotted domain with no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        if is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::single("email", INVALID_EMAIL_MESSAGE))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn is_valid(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot and no empty labels.
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for address in ["maria@example.com", "a.b+tag@sub.domain.org", "x@y.co"] {
            assert!(EmailAddress::new(address).is_ok(), "rejected {address}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in [
            "",
            "plainaddress",
            "@no-local.com",
            "two@@ats.com",
            "spaces in@example.com",
            "nodot@domain",
            "trailing@domain.",
            "double..ok@.com",
        ] {
            assert!(EmailAddress::new(address).is_err(), "accepted {address}");
        }
    }

    #[test]
    fn violation_points_at_email_field() {
        let error = EmailAddress::new("nope").unwrap_err();
        assert_eq!(error.violations[0].loc, vec!["email"]);
        assert_eq!(error.violations[0].message, "Endereço de e-mail inválido.");
    }

    #[test]
    fn equality_is_structural() {
        let a = EmailAddress::new("maria@example.com").unwrap();
        let b = EmailAddress::new("maria@example.com").unwrap();
        assert_eq!(a, b);
    }
}
