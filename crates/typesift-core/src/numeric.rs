//! Numeric and monetary detection.

use tracing::warn;
use typesift_model::{MoneyResult, NumericResult, ParseError, Result};

use crate::canonical::{self, Canonical};
use crate::detector::{Detection, Detector};
use crate::pattern::PatternConfig;

/// Canonicalize `input` and classify the result as integer and/or float.
///
/// # Errors
///
/// Any canonicalization error, or [`ParseError::NumericConversion`] if the
/// canonical string converts to neither `i64` nor `f64`.
pub fn parse_numeric(input: &str, config: &PatternConfig) -> Result<NumericResult> {
    let canonical = canonical::canonicalize(input, config)?;
    classify(&canonical)
}

/// Like [`parse_numeric`], returning the original text alongside the
/// canonical form. A currency symbol is not required.
///
/// # Errors
///
/// Any canonicalization error.
pub fn parse_money(input: &str, config: &PatternConfig) -> Result<MoneyResult> {
    let canonical = canonical::canonicalize(input, config)?;
    Ok(MoneyResult::new(input, canonical.into_value()))
}

/// The integer value of `input`.
///
/// # Errors
///
/// Canonicalization errors, or [`ParseError::NumericConversion`] when the
/// value is not an `i64`.
pub fn parse_int(input: &str, config: &PatternConfig) -> Result<i64> {
    let result = parse_numeric(input, config)?;
    result
        .as_i64()
        .ok_or_else(|| ParseError::NumericConversion {
            canonical: result.canonical().to_string(),
        })
}

/// The floating point value of `input`.
///
/// # Errors
///
/// Canonicalization errors, or [`ParseError::NumericConversion`] when the
/// value is not an `f64`.
pub fn parse_float(input: &str, config: &PatternConfig) -> Result<f64> {
    let result = parse_numeric(input, config)?;
    result
        .as_f64()
        .ok_or_else(|| ParseError::NumericConversion {
            canonical: result.canonical().to_string(),
        })
}

fn classify(canonical: &Canonical) -> Result<NumericResult> {
    let value = canonical.value();
    let is_integer = value.parse::<i64>().is_ok();
    let is_float = value.parse::<f64>().is_ok();
    if !is_integer && !is_float {
        warn!(canonical = value, "canonical string converts to no numeric type");
        return Err(ParseError::NumericConversion {
            canonical: value.to_string(),
        });
    }
    Ok(NumericResult::new(
        value,
        is_integer,
        is_float,
        canonical.had_currency(),
    ))
}

/// Numeric detector bound to one [`PatternConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericParser {
    patterns: PatternConfig,
}

impl NumericParser {
    pub fn new(patterns: PatternConfig) -> Self {
        Self { patterns }
    }

    /// Separators and currency symbols are inferred.
    pub fn generic() -> Self {
        Self::new(PatternConfig::generic())
    }

    /// US-style `$1,234.56`.
    pub fn standard() -> Self {
        Self::new(PatternConfig::standard())
    }

    pub fn custom(currency_symbol: &str, digit_separator: &str, decimal_separator: &str) -> Self {
        Self::new(PatternConfig::new(
            currency_symbol,
            digit_separator,
            decimal_separator,
        ))
    }

    pub fn patterns(&self) -> &PatternConfig {
        &self.patterns
    }

    pub fn parse(&self, input: &str) -> Result<NumericResult> {
        parse_numeric(input, &self.patterns)
    }

    pub fn parse_money(&self, input: &str) -> Result<MoneyResult> {
        parse_money(input, &self.patterns)
    }

    pub fn parse_int(&self, input: &str) -> Result<i64> {
        parse_int(input, &self.patterns)
    }

    pub fn parse_float(&self, input: &str) -> Result<f64> {
        parse_float(input, &self.patterns)
    }

    /// See [`canonical::substitute_separators`].
    pub fn substitute_separators(&self, input: &str) -> Result<String> {
        canonical::substitute_separators(input, &self.patterns)
    }
}

impl Detector for NumericParser {
    fn name(&self) -> &str {
        "numeric"
    }

    fn detect(&self, input: &str) -> Result<Detection> {
        self.parse(input).map(Detection::Numeric)
    }
}
