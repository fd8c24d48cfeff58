//! The composer: runs every detector over one input and merges the results.

use std::fmt;

use tracing::{debug, warn};
use typesift_model::{NumericResult, ParseError, ParsedOutcome, Result, TimeResult};

use crate::boolean::BooleanParser;
use crate::detector::{Detection, Detector};
use crate::numeric::NumericParser;
use crate::time::TimeParser;

/// Numeric, time and boolean detectors composed into one classifier.
///
/// All three detectors always run. When more than one accepts the input
/// the numeric result wins over time, and time wins over boolean.
pub struct Parser {
    numeric: Box<dyn Detector>,
    time: Box<dyn Detector>,
    boolean: Box<dyn Detector>,
}

impl Parser {
    pub fn new(numeric: NumericParser, time: TimeParser, boolean: BooleanParser) -> Self {
        Self::with_detectors(Box::new(numeric), Box::new(time), Box::new(boolean))
    }

    /// Inferred separators, default layouts and boolean literals.
    pub fn generic() -> Self {
        Self::new(
            NumericParser::generic(),
            TimeParser::default(),
            BooleanParser::default(),
        )
    }

    /// US-style numbers, default layouts and boolean literals.
    pub fn standard() -> Self {
        Self::new(
            NumericParser::standard(),
            TimeParser::default(),
            BooleanParser::default(),
        )
    }

    /// Compose arbitrary detectors.
    ///
    /// Each detector must return the [`Detection`] variant of its slot.
    pub fn with_detectors(
        numeric: Box<dyn Detector>,
        time: Box<dyn Detector>,
        boolean: Box<dyn Detector>,
    ) -> Self {
        Self {
            numeric,
            time,
            boolean,
        }
    }

    /// Classify `input`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Aggregate`] when every detector rejects the input.
    /// - [`ParseError::Inconsistent`] when a detector breaks its contract,
    ///   even if another detector accepted the input.
    pub fn parse(&self, input: &str) -> Result<ParsedOutcome> {
        let numeric = self.numeric.detect(input);
        let time = self.time.detect(input);
        let boolean = self.boolean.detect(input);

        let numeric = vet(self.numeric.as_ref(), numeric, numeric_result)?;
        let time = vet(self.time.as_ref(), time, time_result)?;
        let boolean = vet(self.boolean.as_ref(), boolean, boolean_value)?;

        let original = input.to_string();
        let outcome = match (numeric, time, boolean) {
            (Verdict::Accepted(result), _, _) => ParsedOutcome::Numeric { original, result },
            (_, Verdict::Accepted(result), _) => ParsedOutcome::Time { original, result },
            (_, _, Verdict::Accepted(value)) => ParsedOutcome::Boolean { original, value },
            (Verdict::Rejected(numeric), Verdict::Rejected(time), Verdict::Rejected(boolean)) => {
                debug!(input, "no detector accepted input");
                return Err(ParseError::Aggregate {
                    input: original,
                    numeric: Box::new(numeric),
                    time: Box::new(time),
                    boolean: Box::new(boolean),
                });
            }
        };

        debug!(input, kind = %outcome.kind(), "classified input");
        Ok(outcome)
    }

    /// Like [`Parser::parse`], but an input no detector accepts becomes
    /// [`ParsedOutcome::None`] instead of an error.
    ///
    /// # Errors
    ///
    /// Only [`ParseError::Inconsistent`].
    pub fn classify(&self, input: &str) -> Result<ParsedOutcome> {
        match self.parse(input) {
            Err(ParseError::Aggregate { input, .. }) => Ok(ParsedOutcome::unparsed(input)),
            other => other,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::generic()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("numeric", &self.numeric.name())
            .field("time", &self.time.name())
            .field("boolean", &self.boolean.name())
            .finish()
    }
}

/// Classify `input` with `parser`. See [`Parser::parse`].
pub fn parse(input: &str, parser: &Parser) -> Result<ParsedOutcome> {
    parser.parse(input)
}

enum Verdict<T> {
    Accepted(T),
    Rejected(ParseError),
}

/// Split a detector's outcome into acceptance, ordinary rejection, or a
/// fatal contract violation.
fn vet<T>(
    detector: &dyn Detector,
    outcome: Result<Detection>,
    extract: fn(Detection) -> std::result::Result<T, String>,
) -> Result<Verdict<T>> {
    let detection = match outcome {
        Ok(detection) => detection,
        Err(err) if err.is_fatal() => {
            warn!(detector = detector.name(), error = %err, "detector failed fatally");
            return Err(err);
        }
        Err(err) => return Ok(Verdict::Rejected(err)),
    };

    extract(detection).map(Verdict::Accepted).map_err(|reason| {
        warn!(
            detector = detector.name(),
            reason = %reason,
            "detector returned an inconsistent result"
        );
        ParseError::Inconsistent {
            detector: detector.name().to_string(),
            reason,
        }
    })
}

fn numeric_result(detection: Detection) -> std::result::Result<NumericResult, String> {
    match detection {
        Detection::Numeric(result) => match result.invariant_violation() {
            Some(reason) => Err(reason.to_string()),
            None => Ok(result),
        },
        other => Err(format!("expected a numeric result, got {}", other.label())),
    }
}

fn time_result(detection: Detection) -> std::result::Result<TimeResult, String> {
    match detection {
        Detection::Time(result) => match result.invariant_violation() {
            Some(reason) => Err(reason.to_string()),
            None => Ok(result),
        },
        other => Err(format!("expected a time result, got {}", other.label())),
    }
}

fn boolean_value(detection: Detection) -> std::result::Result<bool, String> {
    match detection {
        Detection::Boolean(value) => Ok(value),
        other => Err(format!("expected a boolean result, got {}", other.label())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_lists_detector_names() {
        let parser = Parser::default();
        assert_eq!(
            format!("{parser:?}"),
            r#"Parser { numeric: "numeric", time: "time", boolean: "boolean" }"#
        );
    }

    #[test]
    fn numeric_wins_over_boolean() {
        let outcome = Parser::generic().parse("1").unwrap();
        assert!(outcome.is_integer());
        assert_eq!(outcome.as_i64(), Some(1));
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
