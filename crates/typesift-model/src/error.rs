//! Error taxonomy for string type detection.

use std::fmt;

use thiserror::Error;

/// Errors returned by the numeric, time and boolean detectors and by the
/// composing parser.
///
/// Every variant carries the text that was being inspected so callers can
/// report failures without keeping the input around themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // === Numeric Errors ===
    /// The input contains no ASCII digit at all.
    #[error("no digit found in {input:?}")]
    NoDigit { input: String },

    /// The input is not a grouped numeric literal once the currency symbol
    /// and sign are removed.
    #[error("{input:?} is not a grouped numeric literal")]
    GrammarMismatch { input: String },

    /// Digit and decimal separators cannot be told apart.
    #[error("cannot distinguish digit and decimal separators in {input:?}")]
    SeparatorAmbiguity { input: String },

    /// A canonical numeric string failed to convert to an integer or float.
    #[error("canonical string {canonical:?} does not convert to a number")]
    NumericConversion { canonical: String },

    // === Time Errors ===
    /// No datetime or date layout matched.
    #[error("{input:?} does not match any time layout")]
    TimeParse { input: String },

    // === Boolean Errors ===
    /// The input is not a key of the boolean mapping.
    #[error("{input:?} is not a boolean literal")]
    BooleanParse { input: String },

    // === Composition Errors ===
    /// Every detector rejected the input.
    #[error("{input:?} is not a numeric, time or boolean value")]
    Aggregate {
        input: String,
        numeric: Box<ParseError>,
        time: Box<ParseError>,
        boolean: Box<ParseError>,
    },

    /// A detector reported success with a result that breaks its contract.
    #[error("{detector} detector returned an inconsistent result: {reason}")]
    Inconsistent { detector: String, reason: String },
}

impl ParseError {
    /// The taxonomy tag of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::NoDigit { .. } => ParseErrorKind::NoDigit,
            Self::GrammarMismatch { .. } => ParseErrorKind::GrammarMismatch,
            Self::SeparatorAmbiguity { .. } => ParseErrorKind::SeparatorAmbiguity,
            Self::NumericConversion { .. } => ParseErrorKind::NumericConversion,
            Self::TimeParse { .. } => ParseErrorKind::TimeParse,
            Self::BooleanParse { .. } => ParseErrorKind::BooleanParse,
            Self::Aggregate { .. } => ParseErrorKind::Aggregate,
            Self::Inconsistent { .. } => ParseErrorKind::Inconsistent,
        }
    }

    /// Returns true for errors that signal a broken detector rather than an
    /// input that simply is not of the detected type.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Inconsistent { .. })
    }

    /// The per-detector causes of an [`ParseError::Aggregate`] failure, in
    /// numeric, time, boolean order. Empty for every other variant.
    pub fn causes(&self) -> Vec<&ParseError> {
        match self {
            Self::Aggregate {
                numeric,
                time,
                boolean,
                ..
            } => vec![numeric.as_ref(), time.as_ref(), boolean.as_ref()],
            _ => Vec::new(),
        }
    }

    pub(crate) fn numeric_conversion(canonical: impl Into<String>) -> Self {
        Self::NumericConversion {
            canonical: canonical.into(),
        }
    }
}

/// Data-free tag for each [`ParseError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    NoDigit,
    GrammarMismatch,
    SeparatorAmbiguity,
    NumericConversion,
    TimeParse,
    BooleanParse,
    Aggregate,
    Inconsistent,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoDigit => "no digit",
            Self::GrammarMismatch => "grammar mismatch",
            Self::SeparatorAmbiguity => "separator ambiguity",
            Self::NumericConversion => "numeric conversion",
            Self::TimeParse => "time parse",
            Self::BooleanParse => "boolean parse",
            Self::Aggregate => "aggregate",
            Self::Inconsistent => "inconsistent",
        };
        f.write_str(name)
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
