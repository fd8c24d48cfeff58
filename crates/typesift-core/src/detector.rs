//! The seam between the composer and individual detectors.

use typesift_model::{NumericResult, Result, TimeResult};

/// A successful detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Numeric(NumericResult),
    Time(TimeResult),
    Boolean(bool),
}

impl Detection {
    /// Short name of the variant, for log fields and error reasons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Time(_) => "time",
            Self::Boolean(_) => "boolean",
        }
    }
}

/// Something that can recognise one kind of value in a string.
///
/// Implementations must be pure: the same input always yields the same
/// result. A detector placed in a [`Parser`](crate::Parser) slot is
/// expected to return the matching [`Detection`] variant; anything else is
/// reported as [`ParseError::Inconsistent`](typesift_model::ParseError).
pub trait Detector: Send + Sync {
    /// Name used in logs and in inconsistency errors.
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns the detector's own no-match error when the input is not of
    /// its kind.
    fn detect(&self, input: &str) -> Result<Detection>;
}
