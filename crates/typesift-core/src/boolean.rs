//! Boolean literal lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typesift_model::{ParseError, Result};

use crate::detector::{Detection, Detector};

/// Case-sensitive mapping from literal text to a boolean value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BooleanMap(BTreeMap<String, bool>);

impl BooleanMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn with(mut self, literal: impl Into<String>, value: bool) -> Self {
        self.0.insert(literal.into(), value);
        self
    }

    pub fn get(&self, literal: &str) -> Option<bool> {
        self.0.get(literal).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(literal, value)| (literal.as_str(), *value))
    }
}

impl Default for BooleanMap {
    /// `1`, `yes`, `true` are true; `0`, `no`, `false` are false.
    fn default() -> Self {
        [("1", true), ("yes", true), ("true", true)]
            .into_iter()
            .chain([("0", false), ("no", false), ("false", false)])
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for BooleanMap {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(literal, value)| (literal.into(), value))
                .collect(),
        )
    }
}

/// Look `input` up in `map`.
///
/// # Errors
///
/// Returns [`ParseError::BooleanParse`] for any text that is not a key.
pub fn parse_bool(input: &str, map: &BooleanMap) -> Result<bool> {
    map.get(input).ok_or_else(|| ParseError::BooleanParse {
        input: input.to_string(),
    })
}

/// Boolean detector over a [`BooleanMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanParser {
    map: BooleanMap,
}

impl BooleanParser {
    pub fn new(map: BooleanMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &BooleanMap {
        &self.map
    }

    pub fn parse(&self, input: &str) -> Result<bool> {
        parse_bool(input, &self.map)
    }
}

impl Detector for BooleanParser {
    fn name(&self) -> &str {
        "boolean"
    }

    fn detect(&self, input: &str) -> Result<Detection> {
        self.parse(input).map(Detection::Boolean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_literals() {
        let map = BooleanMap::default();
        let cases = [
            ("yes", Some(true)),
            ("true", Some(true)),
            ("1", Some(true)),
            ("no", Some(false)),
            ("false", Some(false)),
            ("0", Some(false)),
            ("abc", None),
            ("123", None),
            ("123.4", None),
            ("$123.4", None),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_bool(input, &map).ok(), expected, "input {input:?}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let parser = BooleanParser::default();
        assert!(matches!(
            parser.parse("Yes"),
            Err(ParseError::BooleanParse { .. })
        ));
        assert!(parser.parse(" yes").is_err());
    }

    #[test]
    fn custom_map() {
        let map = BooleanMap::new().with("oui", true).with("non", false);
        let parser = BooleanParser::new(map);
        assert_eq!(parser.parse("oui"), Ok(true));
        assert_eq!(parser.parse("non"), Ok(false));
        assert!(parser.parse("yes").is_err());
        assert_eq!(parser.map().len(), 2);
    }
}
