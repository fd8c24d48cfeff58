//! Numeric detection results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::kind::ValueKind;
use crate::money::MoneyResult;

/// A string that was recognised as a number.
///
/// `canonical` is sign-prefixed, free of grouping separators and uses `.`
/// as its decimal point, so it can be handed to any exact conversion.
/// An integer-valued canonical string is both an integer and a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericResult {
    canonical: String,
    is_integer: bool,
    is_float: bool,
    is_money: bool,
}

impl NumericResult {
    pub fn new(
        canonical: impl Into<String>,
        is_integer: bool,
        is_float: bool,
        is_money: bool,
    ) -> Self {
        Self {
            canonical: canonical.into(),
            is_integer,
            is_float,
            is_money,
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn is_integer(&self) -> bool {
        self.is_integer
    }

    pub fn is_float(&self) -> bool {
        self.is_float
    }

    /// True iff a currency symbol was found and stripped.
    pub fn is_money(&self) -> bool {
        self.is_money
    }

    /// The integer value, when the canonical string converts to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        if self.is_integer {
            self.canonical.parse().ok()
        } else {
            None
        }
    }

    /// The floating point value. Not suitable for accounting.
    pub fn as_f64(&self) -> Option<f64> {
        if self.is_float {
            self.canonical.parse().ok()
        } else {
            None
        }
    }

    /// Exact decimal value of the canonical string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NumericConversion`] when the value does not fit
    /// a 96-bit decimal without losing digits.
    pub fn to_decimal(&self) -> Result<Decimal> {
        Decimal::from_str_exact(&self.canonical)
            .map_err(|_| ParseError::numeric_conversion(&self.canonical))
    }

    /// Money view over this result, using `original` as the display text.
    pub fn to_money(&self, original: impl Into<String>) -> MoneyResult {
        MoneyResult::new(original, self.canonical.clone())
    }

    pub fn kind(&self) -> ValueKind {
        if self.is_money {
            ValueKind::Money
        } else if self.is_integer {
            ValueKind::Int
        } else {
            ValueKind::Float
        }
    }

    /// Describes the first broken invariant, if any.
    ///
    /// A well-formed result has a `[-]digits[.digits]` canonical string,
    /// advertises at least one of integer/float, and converts to every type
    /// it advertises.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if !is_canonical_shape(&self.canonical) {
            return Some("canonical string is not of the form [-]digits[.digits]");
        }
        if !self.is_integer && !self.is_float {
            return Some("result is neither an integer nor a float");
        }
        if self.is_integer && self.canonical.parse::<i64>().is_err() {
            return Some("advertised integer does not convert to i64");
        }
        if self.is_float && self.canonical.parse::<f64>().is_err() {
            return Some("advertised float does not convert to f64");
        }
        None
    }
}

fn is_canonical_shape(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, fraction),
        None => (unsigned, ""),
    };
    !integral.is_empty()
        && integral.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
