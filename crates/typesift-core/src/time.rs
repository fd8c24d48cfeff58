//! Calendar date/time detection.
//!
//! Full datetime layouts are tried against the whole input first. If none
//! matches, a leading date-shaped prefix (three groups of one to four digits
//! joined by `-`, `/` or whitespace) is cut from the input and the date-only
//! layouts are tried against that prefix.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::format::ParseErrorKind as ChronoErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use typesift_model::{ParseError, Result, TimeResult};

use crate::detector::{Detection, Detector};

/// strftime specifiers that carry a UTC offset.
const OFFSET_SPECIFIERS: [&str; 5] = ["%z", "%:z", "%::z", "%:::z", "%#z"];

/// Maximum digits per group of a date-shaped prefix.
const MAX_DATE_GROUP_DIGITS: usize = 4;

/// A datetime or date layout.
///
/// The textual form is `rfc3339`, `rfc2822`, or a chrono strftime format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TimeLayout {
    Rfc3339,
    Rfc2822,
    Format(String),
}

impl TimeLayout {
    pub fn format(format: impl Into<String>) -> Self {
        Self::Format(format.into())
    }

    /// True when the layout yields its own UTC offset rather than UTC.
    pub fn has_offset(&self) -> bool {
        match self {
            Self::Rfc3339 | Self::Rfc2822 => true,
            Self::Format(format) => OFFSET_SPECIFIERS
                .iter()
                .any(|specifier| format.contains(specifier)),
        }
    }

    /// Parse the whole of `input` as a datetime.
    ///
    /// Formats without an offset are read as UTC.
    pub fn parse_datetime(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(input).ok(),
            Self::Rfc2822 => DateTime::parse_from_rfc2822(input).ok(),
            Self::Format(format) if self.has_offset() => {
                DateTime::parse_from_str(input, format).ok()
            }
            Self::Format(format) => NaiveDateTime::parse_from_str(input, format)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset()),
        }
    }

    /// Parse the whole of `input` with a format that has no time-of-day
    /// fields, such as `%b %d %Y`.
    ///
    /// Returns `None` for formats that do carry a time of day, so a value
    /// they reject is never accepted at midnight instead.
    pub fn parse_date_only(&self, input: &str) -> Option<NaiveDate> {
        let Self::Format(format) = self else {
            return None;
        };
        match NaiveDateTime::parse_from_str(input, format) {
            Err(err) if err.kind() == ChronoErrorKind::NotEnough => {
                NaiveDate::parse_from_str(input, format).ok()
            }
            _ => None,
        }
    }

    /// Parse the whole of `input` as a calendar date.
    pub fn parse_date(&self, input: &str) -> Option<NaiveDate> {
        match self {
            Self::Format(format) => NaiveDate::parse_from_str(input, format).ok(),
            Self::Rfc3339 | Self::Rfc2822 => self.parse_datetime(input).map(|dt| dt.date_naive()),
        }
    }
}

impl fmt::Display for TimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc3339 => f.write_str("rfc3339"),
            Self::Rfc2822 => f.write_str("rfc2822"),
            Self::Format(format) => f.write_str(format),
        }
    }
}

impl FromStr for TimeLayout {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "rfc3339" => Self::Rfc3339,
            "rfc2822" => Self::Rfc2822,
            format => Self::Format(format.to_string()),
        })
    }
}

impl From<String> for TimeLayout {
    fn from(s: String) -> Self {
        match s.as_str() {
            "rfc3339" => Self::Rfc3339,
            "rfc2822" => Self::Rfc2822,
            _ => Self::Format(s),
        }
    }
}

impl From<TimeLayout> for String {
    fn from(layout: TimeLayout) -> Self {
        layout.to_string()
    }
}

/// Full datetime layouts, in the order they are tried.
pub fn default_datetime_layouts() -> Vec<TimeLayout> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f%#z",
        "%Y-%m-%d %H:%M:%S%.f%#z",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ];
    let tail = [
        // ANSI C
        "%a %b %e %H:%M:%S %Y",
        // Ruby date
        "%a %b %d %H:%M:%S %z %Y",
        // RFC 822 with numeric zone
        "%d %b %y %H:%M %z",
        // US then EU short forms
        "%m/%d/%y %H:%M",
        "%d/%m/%y %H:%M",
        "%b. %d %Y %H:%M:%S",
    ];

    let mut layouts = vec![TimeLayout::Rfc3339];
    layouts.extend(formats.into_iter().map(TimeLayout::format));
    layouts.push(TimeLayout::Rfc2822);
    layouts.extend(tail.into_iter().map(TimeLayout::format));
    layouts
}

/// Date-only layouts, in the order they are tried against a date prefix.
///
/// Month-first forms come before day-first ones, so `"01/02/2009"` is
/// January 2nd.
pub fn default_date_layouts() -> Vec<TimeLayout> {
    [
        "%m/%d/%y", "%d/%m/%y", "%m-%d-%y", "%d-%m-%y", "%m/%d/%Y", "%m-%d-%Y", "%Y/%m/%d",
        "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y",
    ]
    .into_iter()
    .map(TimeLayout::format)
    .collect()
}

/// Leading `d{1,4} sep d{1,4} sep d{1,4}` prefix of `input`, where `sep` is
/// `-`, `/` or ASCII whitespace.
pub fn date_prefix(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    let mut end = digit_group_end(bytes, 0)?;
    for _ in 0..2 {
        let separator = *bytes.get(end)?;
        if !(separator == b'-' || separator == b'/' || separator.is_ascii_whitespace()) {
            return None;
        }
        end = digit_group_end(bytes, end + 1)?;
    }
    Some(&input[..end])
}

fn digit_group_end(bytes: &[u8], start: usize) -> Option<usize> {
    let digits = bytes
        .get(start..)?
        .iter()
        .take(MAX_DATE_GROUP_DIGITS)
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(start + digits)
}

/// Detect a datetime, or failing that a leading date.
///
/// A datetime layout without time-of-day fields matches the whole input
/// as a date at midnight UTC.
///
/// # Errors
///
/// Returns [`ParseError::TimeParse`] when no layout matches.
pub fn parse_time(
    input: &str,
    datetime_layouts: &[TimeLayout],
    date_layouts: &[TimeLayout],
) -> Result<TimeResult> {
    for layout in datetime_layouts {
        if let Some(value) = layout.parse_datetime(input) {
            debug!(input, layout = %layout, "matched datetime layout");
            return Ok(TimeResult::datetime(input, layout.to_string(), value));
        }
        if let Some(date) = layout.parse_date_only(input) {
            debug!(input, layout = %layout, "matched date-only datetime layout");
            return Ok(TimeResult::date(input, layout.to_string(), date));
        }
    }

    if let Some(prefix) = date_prefix(input) {
        for layout in date_layouts {
            if let Some(date) = layout.parse_date(prefix) {
                debug!(input, prefix, layout = %layout, "matched date layout");
                return Ok(TimeResult::date(prefix, layout.to_string(), date));
            }
        }
    }

    Err(ParseError::TimeParse {
        input: input.to_string(),
    })
}

/// Ordered datetime and date layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParser {
    datetime_layouts: Vec<TimeLayout>,
    date_layouts: Vec<TimeLayout>,
}

impl TimeParser {
    pub fn new(datetime_layouts: Vec<TimeLayout>, date_layouts: Vec<TimeLayout>) -> Self {
        Self {
            datetime_layouts,
            date_layouts,
        }
    }

    pub fn datetime_layouts(&self) -> &[TimeLayout] {
        &self.datetime_layouts
    }

    pub fn date_layouts(&self) -> &[TimeLayout] {
        &self.date_layouts
    }

    /// See [`parse_time`].
    pub fn parse(&self, input: &str) -> Result<TimeResult> {
        parse_time(input, &self.datetime_layouts, &self.date_layouts)
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new(default_datetime_layouts(), default_date_layouts())
    }
}

impl Detector for TimeParser {
    fn name(&self) -> &str {
        "time"
    }

    fn detect(&self, input: &str) -> Result<Detection> {
        self.parse(input).map(Detection::Time)
    }
}
