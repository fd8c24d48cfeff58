//! The composed result of running every detector over one input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ValueKind;
use crate::money::MoneyResult;
use crate::numeric::NumericResult;
use crate::time::TimeResult;

/// What an input string was detected as.
///
/// When several detectors accept the same input the numeric branch wins
/// over time, and time wins over boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedOutcome {
    Numeric {
        original: String,
        result: NumericResult,
    },
    Time {
        original: String,
        result: TimeResult,
    },
    Boolean {
        original: String,
        value: bool,
    },
    None {
        original: String,
    },
}

impl ParsedOutcome {
    /// Outcome for an input no detector accepted.
    pub fn unparsed(original: impl Into<String>) -> Self {
        Self::None {
            original: original.into(),
        }
    }

    /// The raw input.
    pub fn original(&self) -> &str {
        match self {
            Self::Numeric { original, .. }
            | Self::Time { original, .. }
            | Self::Boolean { original, .. }
            | Self::None { original } => original,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric { result, .. } => result.kind(),
            Self::Time { .. } => ValueKind::Time,
            Self::Boolean { .. } => ValueKind::Bool,
            Self::None { .. } => ValueKind::None,
        }
    }

    pub fn numeric(&self) -> Option<&NumericResult> {
        match self {
            Self::Numeric { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<&TimeResult> {
        match self {
            Self::Time { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Money view of a numeric outcome that carried a currency symbol.
    pub fn money(&self) -> Option<MoneyResult> {
        match self {
            Self::Numeric { original, result } if result.is_money() => {
                Some(result.to_money(original.as_str()))
            }
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.numeric().and_then(NumericResult::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.numeric().and_then(NumericResult::as_f64)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    pub fn is_integer(&self) -> bool {
        self.numeric().is_some_and(NumericResult::is_integer)
    }

    pub fn is_float(&self) -> bool {
        self.numeric().is_some_and(NumericResult::is_float)
    }

    pub fn is_money(&self) -> bool {
        self.numeric().is_some_and(NumericResult::is_money)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time { .. })
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean { .. })
    }
}

impl fmt::Display for ParsedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.original())
    }
}
