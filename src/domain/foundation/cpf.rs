//! CPF value object (Cadastro de Pessoas Físicas, the Brazilian tax id).

use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

const INVALID_CPF_MESSAGE: &str = "Invalid CPF.";

/// An 11-digit CPF, stored normalized (digits only) and checksum-valid.
///
/// Accepts the raw 11-digit form or the punctuated `ddd.ddd.ddd-dd` form;
/// both normalize to the same value. Compared and hashed by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Validates and normalizes a CPF using the official algorithm.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = clean(input);
        if is_valid(&digits) {
            Ok(Self(digits))
        } else {
            Err(ValidationError::single("cpf", INVALID_CPF_MESSAGE))
        }
    }

    /// The normalized 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Strips every non-digit character.
fn clean(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn is_valid(digits: &str) -> bool {
    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

    // A CPF with 11 identical digits passes the checksum but is not issued.
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    let first = check_digit(&d[..9], 10);
    let second = check_digit(&d[..10], 11);

    d[9] == first && d[10] == second
}

/// Check digit over the leading digits, weights descending from `start`.
/// Results above 9 clamp to 0.
fn check_digit(digits: &[u32], start: u32) -> u32 {
    let checksum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (start - i as u32))
        .sum();
    let digit = 11 - (checksum % 11);
    if digit > 9 {
        0
    } else {
        digit
    }
}
