//! Value kind tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The most specific type a string was detected as.
///
/// Numeric results report `Money` when a currency symbol was present,
/// otherwise `Int` when the value converts to an integer and `Float` when it
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Int,
    Float,
    Money,
    Time,
    Bool,
    None,
}

impl ValueKind {
    /// Short lowercase name, `"None"` for the undetected kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Money => "money",
            Self::Time => "time",
            Self::Bool => "bool",
            Self::None => "None",
        }
    }

    /// Whether the kind comes from the numeric detector.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Money)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
