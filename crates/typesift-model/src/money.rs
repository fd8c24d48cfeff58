//! Monetary values.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// A monetary amount parsed from free-form text.
///
/// `original` keeps the untouched input (currency symbol, sign and grouping
/// included) for display; `canonical` is the decimal-point form used for
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyResult {
    original: String,
    canonical: String,
}

impl MoneyResult {
    pub fn new(original: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            canonical: canonical.into(),
        }
    }

    /// The input exactly as it was given.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Sign-prefixed, grouping-free, `.`-as-decimal representation.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Floating point approximation. Use [`MoneyResult::to_decimal`] for
    /// accounting.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NumericConversion`] if the canonical string is
    /// not a valid float.
    pub fn to_f64(&self) -> Result<f64> {
        self.canonical
            .parse()
            .map_err(|_| ParseError::numeric_conversion(&self.canonical))
    }

    /// Exact decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NumericConversion`] if the amount cannot be
    /// represented without losing digits.
    pub fn to_decimal(&self) -> Result<Decimal> {
        Decimal::from_str_exact(&self.canonical)
            .map_err(|_| ParseError::numeric_conversion(&self.canonical))
    }
}

impl fmt::Display for MoneyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_keeps_original_formatting() {
        let money = MoneyResult::new("$123,456.05", "123456.05");
        assert_eq!(money.to_string(), "$123,456.05");
        assert_eq!(money.canonical(), "123456.05");
    }

    #[test]
    fn conversions() {
        let money = MoneyResult::new("€123,45", "123.45");
        assert_eq!(money.to_f64().unwrap(), 123.45);
        assert_eq!(
            money.to_decimal().unwrap(),
            Decimal::from_str("123.45").unwrap()
        );
    }

    #[test]
    fn conversion_failure_names_canonical() {
        let money = MoneyResult::new("$", "");
        assert_eq!(
            money.to_f64(),
            Err(ParseError::NumericConversion {
                canonical: String::new()
            })
        );
    }
}
