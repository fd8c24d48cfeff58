//! Datetime and date detection with the default and custom layouts.

use chrono::{Datelike, NaiveDate, Timelike};
use typesift_core::{
    ParseError, TimeLayout, TimeParser, default_date_layouts, default_datetime_layouts,
    parse_time,
};

fn parse_default(input: &str) -> typesift_core::TimeResult {
    parse_time(input, &default_datetime_layouts(), &default_date_layouts())
        .unwrap_or_else(|err| panic!("{input:?} should parse: {err}"))
}

#[test]
fn datetimes_keep_time_of_day() {
    for input in [
        "2009-01-02T15:04:05Z",
        "2009-01-02T15:04:05-07:00",
        "2009-01-02T15:04:05-0700",
        "2009-01-02 15:04:05-0700",
        "2009-01-02T15:04:05.123",
        "Fri, 02 Jan 2009 15:04:05 -0700",
        "01/02/09 15:04",
        "Fri Jan  2 15:04:05 2009",
        "Fri Jan 02 15:04:05 -0700 2009",
        "Jan. 2 2009 15:04:05",
    ] {
        let result = parse_default(input);
        assert!(!result.is_date_only(), "{input:?}");
        assert_eq!(result.matched_substring(), input);
        assert!(!result.layout().is_empty());
        assert_eq!(result.value().hour(), 15, "{input:?}");
    }
}

#[test]
fn dates_are_midnight() {
    for input in [
        "2009-01-02",
        "2009/01/02",
        "01/02/2009",
        "02/01/2009",
        "02/01/2009Tflaksdfj",
    ] {
        let result = parse_default(input);
        assert!(result.is_date_only(), "{input:?}");
        assert_eq!(result.value().hour(), 0, "{input:?}");
        assert_eq!(result.value().minute(), 0, "{input:?}");
    }
}

#[test]
fn rfc3339_wins_first() {
    let result = parse_default("2009-01-02T15:04:05Z");
    assert_eq!(result.layout(), "rfc3339");
    assert_eq!(result.value().offset().local_minus_utc(), 0);
}

#[test]
fn offsets_are_preserved() {
    let result = parse_default("2009-01-02T15:04:05-07:00");
    assert_eq!(result.value().offset().local_minus_utc(), -7 * 3600);
}

#[test]
fn date_match_reports_prefix() {
    let result = parse_default("2015-09-12Tflaksjdfl");
    assert_eq!(result.matched_substring(), "2015-09-12");
    assert_eq!(result.to_string(), "2015-09-12");
    assert_eq!(result.layout(), "%Y-%m-%d");
    assert_eq!(
        result.date_naive(),
        NaiveDate::from_ymd_opt(2015, 9, 12).unwrap()
    );
}

#[test]
fn month_first_wins_over_day_first() {
    let result = parse_default("02/01/2009");
    assert_eq!(result.date_naive().month(), 2);
    assert_eq!(result.date_naive().day(), 1);

    // Only the day-first layout accepts a day above 12 in first position.
    let result = parse_default("25/12/2009");
    assert_eq!(result.layout(), "%d/%m/%Y");
    assert_eq!(result.date_naive().month(), 12);
}

#[test]
fn rejections() {
    for input in ["abc", "", "134.00", "$134.00", "2009-13-45"] {
        let err = parse_time(input, &default_datetime_layouts(), &default_date_layouts())
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::TimeParse {
                input: input.to_string()
            }
        );
    }
}

#[test]
fn custom_layouts() {
    let parser = TimeParser::new(
        vec![TimeLayout::format("%d.%m.%Y %H:%M")],
        vec![TimeLayout::format("%d %m %Y")],
    );
    let result = parser.parse("24.12.2020 18:30").unwrap();
    assert_eq!(result.value().hour(), 18);

    let result = parser.parse("24 12 2020 whatever").unwrap();
    assert!(result.is_date_only());
    assert_eq!(result.matched_substring(), "24 12 2020");

    assert!(parser.parse("2020-12-24").is_err());
}

#[test]
fn datetime_layouts_without_time_of_day_yield_dates() {
    let parser = TimeParser::new(
        vec![TimeLayout::format("%b %d %Y"), TimeLayout::format("%Y-%m-%d")],
        vec![],
    );

    let result = parser.parse("Jan 02 2006").unwrap();
    assert!(result.is_date_only());
    assert_eq!(result.matched_substring(), "Jan 02 2006");
    assert_eq!(result.layout(), "%b %d %Y");
    assert_eq!(result.date_naive(), NaiveDate::from_ymd_opt(2006, 1, 2).unwrap());
    assert_eq!(result.value().hour(), 0);
    assert_eq!(result.value().offset().local_minus_utc(), 0);
    assert_eq!(result.invariant_violation(), None);

    let result = parser.parse("2009-01-02").unwrap();
    assert!(result.is_date_only());
    assert_eq!(result.layout(), "%Y-%m-%d");

    // The whole input must match; there is no prefix extraction here.
    assert!(parser.parse("Jan 02 2006 extra").is_err());
}
