//! Schema-less type detection for free-form strings.
//!
//! Given text such as `"$1,234.56"`, `"2009-01-02T15:04:05Z"` or `"yes"`,
//! the detectors in this crate decide whether it is a number (optionally
//! money), a calendar time, or a boolean, and produce a normalized value.
//!
//! - [`pattern`]: currency and separator matchers ([`PatternConfig`])
//! - [`canonical`]: separator disambiguation and canonical numeric strings
//! - [`numeric`], [`time`], [`boolean`]: the individual detectors
//! - [`parser`]: the [`Parser`] composer and its precedence rules
//! - [`options`]: TOML-backed configuration
//!
//! ```
//! use typesift_core::{Parser, ValueKind};
//!
//! let parser = Parser::standard();
//! let outcome = parser.parse("$12,345").unwrap();
//! assert_eq!(outcome.kind(), ValueKind::Money);
//! assert_eq!(outcome.as_i64(), Some(12_345));
//! ```

pub mod boolean;
pub mod canonical;
pub mod detector;
pub mod error;
pub mod numeric;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod time;

pub use boolean::{BooleanMap, BooleanParser, parse_bool};
pub use canonical::{Canonical, canonicalize, substitute_separators};
pub use detector::{Detection, Detector};
pub use error::ConfigError;
pub use numeric::{NumericParser, parse_float, parse_int, parse_money, parse_numeric};
pub use options::{NumericOptions, ParserOptions, TimeOptions};
pub use parser::{Parser, parse};
pub use pattern::{CurrencyMatcher, PatternConfig, SeparatorMatcher, TrailingDecimal};
pub use time::{
    TimeLayout, TimeParser, date_prefix, default_date_layouts, default_datetime_layouts,
    parse_time,
};
pub use typesift_model::{
    MoneyResult, NumericResult, ParseError, ParseErrorKind, ParsedOutcome, TimeResult, ValueKind,
};
