//! Calendar date/time detection results.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A string, or a date-shaped prefix of it, that matched a time layout.
///
/// Values parsed with a layout that carries no offset are expressed in UTC.
/// When `date_only` is set the time-of-day of `value` is midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResult {
    matched: String,
    layout: String,
    value: DateTime<FixedOffset>,
    date_only: bool,
}

impl TimeResult {
    /// Result of a full datetime layout.
    pub fn datetime(
        matched: impl Into<String>,
        layout: impl Into<String>,
        value: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            matched: matched.into(),
            layout: layout.into(),
            value,
            date_only: false,
        }
    }

    /// Result of a date-only layout; the value is midnight UTC of `date`.
    pub fn date(matched: impl Into<String>, layout: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            matched: matched.into(),
            layout: layout.into(),
            value: date.and_time(NaiveTime::MIN).and_utc().fixed_offset(),
            date_only: true,
        }
    }

    /// The text the layout was applied to. For date-only matches this is
    /// the extracted prefix, not the whole input.
    pub fn matched_substring(&self) -> &str {
        &self.matched
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn value(&self) -> DateTime<FixedOffset> {
        self.value
    }

    pub fn date_naive(&self) -> NaiveDate {
        self.value.date_naive()
    }

    pub fn is_date_only(&self) -> bool {
        self.date_only
    }

    /// Describes a broken invariant, if any.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if self.date_only && self.value.time() != NaiveTime::MIN {
            return Some("date-only result has a non-zero time of day");
        }
        if self.layout.is_empty() {
            return Some("result does not name the layout that matched");
        }
        None
    }
}

impl fmt::Display for TimeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.matched)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn date_result_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 12).unwrap();
        let result = TimeResult::date("2015-09-12", "%Y-%m-%d", date);
        assert_eq!(result.value().hour(), 0);
        assert_eq!(result.value().offset().local_minus_utc(), 0);
        assert_eq!(result.date_naive(), date);
        assert_eq!(result.to_string(), "2015-09-12");
        assert!(result.invariant_violation().is_none());
    }

    #[test]
    fn datetime_result_keeps_offset() {
        let value = DateTime::parse_from_rfc3339("2009-01-02T15:04:05-07:00").unwrap();
        let result = TimeResult::datetime("2009-01-02T15:04:05-07:00", "rfc3339", value);
        assert_eq!(result.value().hour(), 15);
        assert!(!result.is_date_only());
    }

    #[test]
    fn date_only_with_time_is_a_violation() {
        let value = DateTime::parse_from_rfc3339("2009-01-02T15:04:05Z").unwrap();
        let mut result = TimeResult::datetime("2009-01-02", "%Y-%m-%d", value);
        result.date_only = true;
        assert!(result.invariant_violation().is_some());
    }
}
