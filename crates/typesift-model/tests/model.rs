//! Tests for typesift-model types.

use chrono::{DateTime, NaiveDate};
use typesift_model::{
    NumericResult, ParseError, ParseErrorKind, ParsedOutcome, TimeResult, ValueKind,
};

#[test]
fn numeric_outcome_serializes_with_type_tag() {
    let outcome = ParsedOutcome::Numeric {
        original: "$12,345".to_string(),
        result: NumericResult::new("12345", true, true, true),
    };
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "type": "numeric",
      "original": "$12,345",
      "result": {
        "canonical": "12345",
        "is_integer": true,
        "is_float": true,
        "is_money": true
      }
    }
    "#);
}

#[test]
fn boolean_outcome_serializes_with_type_tag() {
    let outcome = ParsedOutcome::Boolean {
        original: "yes".to_string(),
        value: true,
    };
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "type": "boolean",
      "original": "yes",
      "value": true
    }
    "#);
}

#[test]
fn time_outcome_round_trips() {
    let value = DateTime::parse_from_rfc3339("2009-01-02T15:04:05-07:00").expect("valid rfc3339");
    let outcome = ParsedOutcome::Time {
        original: "2009-01-02T15:04:05-07:00".to_string(),
        result: TimeResult::datetime("2009-01-02T15:04:05-07:00", "rfc3339", value),
    };
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let round: ParsedOutcome = serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(round, outcome);
    assert_eq!(round.kind(), ValueKind::Time);
}

#[test]
fn date_outcome_exposes_prefix() {
    let date = NaiveDate::from_ymd_opt(2015, 9, 12).expect("valid date");
    let outcome = ParsedOutcome::Time {
        original: "2015-09-12Tflaksjdfl".to_string(),
        result: TimeResult::date("2015-09-12", "%Y-%m-%d", date),
    };
    let time = outcome.time().expect("time branch");
    assert_eq!(time.matched_substring(), "2015-09-12");
    assert_eq!(outcome.original(), "2015-09-12Tflaksjdfl");
    assert!(time.is_date_only());
}

#[test]
fn value_kind_names() {
    let names: Vec<String> = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Money,
        ValueKind::Time,
        ValueKind::Bool,
        ValueKind::None,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["int", "float", "money", "time", "bool", "None"]);
    assert!(ValueKind::Money.is_numeric());
    assert!(!ValueKind::Time.is_numeric());
}

#[test]
fn aggregate_error_message() {
    let err = ParseError::Aggregate {
        input: "blah".to_string(),
        numeric: Box::new(ParseError::NoDigit {
            input: "blah".to_string(),
        }),
        time: Box::new(ParseError::TimeParse {
            input: "blah".to_string(),
        }),
        boolean: Box::new(ParseError::BooleanParse {
            input: "blah".to_string(),
        }),
    };
    insta::assert_snapshot!(err.to_string(), @r#""blah" is not a numeric, time or boolean value"#);
    assert_eq!(err.kind(), ParseErrorKind::Aggregate);
}
