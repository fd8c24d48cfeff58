//! Compiled matchers for currency symbols and number separators.
//!
//! Each matcher is built from a short pattern text:
//!
//! - `""`: infer. Currency symbols are recognised heuristically, separators
//!   match either `.` or `,`.
//! - a single character such as `"$"`, `"."` or `","`: that literal.
//! - anything else: a regular expression, or a literal when the text is not
//!   a valid expression.
//!
//! Construction never fails.

use std::mem;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Currency symbols that contain a `.` and therefore escape the generic
/// symbol scan.
const DOTTED_SYMBOLS: [&str; 4] = ["Дин.", "p.", "S/.", "B/."];

/// Longest run of characters the inferring matcher accepts as a symbol.
const MAX_SYMBOL_CHARS: usize = 3;

/// What to do with a decimal separator that ends the input, as in `"12."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingDecimal {
    /// Append `00`, reading the value as a whole number of currency units.
    #[default]
    AppendZeros,
    /// Drop the dangling separator.
    Drop,
}

/// Matcher for a digit or decimal separator.
#[derive(Debug, Clone)]
pub enum SeparatorMatcher {
    /// Either `.` or `,`.
    Any,
    Literal(String),
    Pattern(Regex),
}

impl SeparatorMatcher {
    pub fn new(text: &str) -> Self {
        match normalize_separator(text) {
            "" => Self::Any,
            literal if is_literal(literal) => Self::Literal(literal.to_string()),
            pattern => match Regex::new(pattern) {
                Ok(re) => Self::Pattern(re),
                Err(_) => Self::Literal(pattern.to_string()),
            },
        }
    }

    /// Byte length of a non-empty match that starts exactly at `pos`.
    pub fn match_at(&self, haystack: &str, pos: usize) -> Option<usize> {
        let rest = haystack.get(pos..)?;
        match self {
            Self::Any => rest
                .chars()
                .next()
                .filter(|c| matches!(c, '.' | ','))
                .map(char::len_utf8),
            Self::Literal(literal) => rest.starts_with(literal.as_str()).then_some(literal.len()),
            Self::Pattern(re) => re
                .find_at(haystack, pos)
                .filter(|m| m.start() == pos && !m.is_empty())
                .map(|m| m.len()),
        }
    }

    /// Start of a match that ends exactly at the end of `haystack`.
    pub fn match_at_end(&self, haystack: &str) -> Option<usize> {
        haystack
            .char_indices()
            .rev()
            .map(|(pos, _)| pos)
            .find(|&pos| self.match_at(haystack, pos) == Some(haystack.len() - pos))
    }

    /// The normalised text this matcher was compiled from.
    pub fn source(&self) -> &str {
        match self {
            Self::Any => "",
            Self::Literal(literal) => literal,
            Self::Pattern(re) => re.as_str(),
        }
    }
}

impl PartialEq for SeparatorMatcher {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other) && self.source() == other.source()
    }
}

impl Eq for SeparatorMatcher {}

/// Matcher for a leading currency symbol.
#[derive(Debug, Clone)]
pub enum CurrencyMatcher {
    /// Heuristic: a known dotted symbol, or up to three characters that are
    /// not digits, signs, separators or whitespace, plus one optional
    /// whitespace character. Recognises `$`, `₹`, `Lek`, `HK$`, `USD `.
    Infer,
    Literal(String),
    Pattern(Regex),
}

impl CurrencyMatcher {
    pub fn new(text: &str) -> Self {
        match normalize_currency(text) {
            "" => Self::Infer,
            literal if is_literal(literal) => Self::Literal(literal.to_string()),
            pattern => match Regex::new(pattern) {
                Ok(re) => Self::Pattern(re),
                Err(_) => Self::Literal(pattern.to_string()),
            },
        }
    }

    /// Byte length of the currency symbol at the start of `input`, if any.
    pub fn leading_len(&self, input: &str) -> Option<usize> {
        match self {
            Self::Infer => infer_symbol_len(input),
            Self::Literal(literal) => input.starts_with(literal.as_str()).then_some(literal.len()),
            Self::Pattern(re) => re
                .find(input)
                .filter(|m| m.start() == 0 && !m.is_empty())
                .map(|m| m.end()),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Infer => "",
            Self::Literal(literal) => literal,
            Self::Pattern(re) => re.as_str(),
        }
    }
}

impl PartialEq for CurrencyMatcher {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other) && self.source() == other.source()
    }
}

impl Eq for CurrencyMatcher {}

/// The three matchers the canonicalizer is parameterised by.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConfig {
    currency: CurrencyMatcher,
    digit: SeparatorMatcher,
    decimal: SeparatorMatcher,
    trailing_decimal: TrailingDecimal,
}

impl PatternConfig {
    pub fn new(currency_symbol: &str, digit_separator: &str, decimal_separator: &str) -> Self {
        Self {
            currency: CurrencyMatcher::new(currency_symbol),
            digit: SeparatorMatcher::new(digit_separator),
            decimal: SeparatorMatcher::new(decimal_separator),
            trailing_decimal: TrailingDecimal::default(),
        }
    }

    /// Infers the currency symbol and both separators.
    ///
    /// Reads `"123.456"` and `"123,456"` as the integer `123456`.
    pub fn generic() -> Self {
        Self::new("", "", "")
    }

    /// `$` currency, `,` digit separator, `.` decimal separator.
    ///
    /// Reads `"123.456"` as a real number and `"$123,456"` as an integer.
    pub fn standard() -> Self {
        Self::new("$", ",", ".")
    }

    #[must_use]
    pub fn with_trailing_decimal(mut self, policy: TrailingDecimal) -> Self {
        self.trailing_decimal = policy;
        self
    }

    pub fn currency(&self) -> &CurrencyMatcher {
        &self.currency
    }

    pub fn digit_separator(&self) -> &SeparatorMatcher {
        &self.digit
    }

    pub fn decimal_separator(&self) -> &SeparatorMatcher {
        &self.decimal
    }

    pub fn trailing_decimal(&self) -> TrailingDecimal {
        self.trailing_decimal
    }

    /// True when the digit and decimal separators were configured
    /// identically, so their roles must be inferred from the input.
    pub fn is_ambiguous(&self) -> bool {
        self.digit == self.decimal
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::generic()
    }
}

/// Maps the bracketed spellings of the built-in separators onto their
/// shorthand so equivalent configs compare equal.
fn normalize_separator(text: &str) -> &str {
    match text {
        "[.,]" | "[\\.,]" | "[,.]" | "[,\\.]" => "",
        "[.]" | "[\\.]" | "\\." => ".",
        "[,]" => ",",
        other => other,
    }
}

fn normalize_currency(text: &str) -> &str {
    match text {
        "^[\\$]" | "^[$]" | "^\\$" | "[\\$]" | "[$]" | "\\$" => "$",
        other => other,
    }
}

/// Single characters and text free of regex metacharacters match literally.
fn is_literal(text: &str) -> bool {
    text.chars().count() == 1 || regex::escape(text) == text
}

fn infer_symbol_len(input: &str) -> Option<usize> {
    if let Some(symbol) = DOTTED_SYMBOLS
        .into_iter()
        .find(|symbol| input.starts_with(*symbol))
    {
        return Some(symbol.len());
    }

    let end = input
        .char_indices()
        .take(MAX_SYMBOL_CHARS)
        .take_while(|&(_, c)| is_symbol_char(c))
        .last()
        .map(|(pos, c)| pos + c.len_utf8())?;
    let space = input[end..]
        .chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map_or(0, char::len_utf8);
    Some(end + space)
}

fn is_symbol_char(c: char) -> bool {
    !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '.' | ','))
}
