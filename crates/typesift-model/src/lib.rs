//! Data model for schema-less string type detection.
//!
//! This crate holds the types shared by the detectors in `typesift-core`:
//!
//! - **numeric**: [`NumericResult`], a canonical numeric string plus its
//!   integer/float/money tags
//! - **money**: [`MoneyResult`], the original text alongside its canonical form
//! - **time**: [`TimeResult`], the matched text, layout and timestamp
//! - **outcome**: [`ParsedOutcome`], the tagged union returned by the composer
//! - **error**: [`ParseError`], the shared error taxonomy

pub mod error;
pub mod kind;
pub mod money;
pub mod numeric;
pub mod outcome;
pub mod time;

pub use error::{ParseError, ParseErrorKind, Result};
pub use kind::ValueKind;
pub use money::MoneyResult;
pub use numeric::NumericResult;
pub use outcome::ParsedOutcome;
pub use time::TimeResult;
