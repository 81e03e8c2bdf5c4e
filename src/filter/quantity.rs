//! @acp:module "Quantity Normalization"
//! @acp:summary "Input-boundary validation for question counts"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Every quantity that reaches the filter state passes through here.
//! Text input is read like a form field: leading whitespace, an optional
//! sign, then the leading run of digits; anything after the digits is
//! ignored (`"3.7"` reads as 3, `"12abc"` as 12). Input with no leading
//! digits is rejected. Numbers are truncated toward zero. Negative values
//! are clamped to zero and values past [`Quantity::MAX`] saturate.

use serde::{Deserialize, Serialize};

use crate::error::{QsetError, Result};

/// A non-negative question count
pub type Quantity = u32;

/// Raw quantity as it arrives from a form field or an edits file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

impl QuantityInput {
    /// Validate and normalize into a stored quantity
    pub fn normalize(&self) -> Result<Quantity> {
        match self {
            QuantityInput::Number(n) => normalize_number(*n),
            QuantityInput::Text(s) => parse_quantity(s),
        }
    }
}

impl From<Quantity> for QuantityInput {
    fn from(qty: Quantity) -> Self {
        QuantityInput::Number(f64::from(qty))
    }
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        QuantityInput::Text(s.to_string())
    }
}

/// Parse the text of a quantity field
pub fn parse_quantity(input: &str) -> Result<Quantity> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(QsetError::InvalidQuantity(input.to_string()));
    }
    if negative {
        return Ok(0);
    }

    let digits = &rest[..digits_len];
    Ok(digits.parse::<Quantity>().unwrap_or(Quantity::MAX))
}

/// Truncate a numeric input into a stored quantity
pub fn normalize_number(value: f64) -> Result<Quantity> {
    if !value.is_finite() {
        return Err(QsetError::InvalidQuantity(value.to_string()));
    }
    let truncated = value.trunc();
    if truncated <= 0.0 {
        Ok(0)
    } else if truncated >= f64::from(Quantity::MAX) {
        Ok(Quantity::MAX)
    } else {
        Ok(truncated as Quantity)
    }
}
