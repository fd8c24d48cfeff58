//! Canonicalization of grouped numeric literals.
//!
//! Turns text such as `"$1.234.567,89"` into `"1234567.89"`: the currency
//! symbol and sign are removed, the remainder is checked against
//!
//! ```text
//! digits (digit-separator ddd)* decimal-separator? digits*
//! ```
//!
//! and every separator is then either dropped (grouping) or rewritten to `.`
//! (decimal point). When the config cannot tell the two separators apart,
//! their roles are inferred from how many occurrences there are and where
//! they sit.

use tracing::trace;
use typesift_model::{ParseError, Result};

use crate::pattern::{PatternConfig, SeparatorMatcher, TrailingDecimal};

/// Digits after a lone ambiguous separator that mark it as grouping.
const GROUP_DIGITS: usize = 3;

/// A numeric literal reduced to `[-]digits[.digits]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    value: String,
    had_currency: bool,
}

impl Canonical {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether a currency symbol was stripped from the input.
    pub fn had_currency(&self) -> bool {
        self.had_currency
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

impl Span {
    fn end(self) -> usize {
        self.start + self.len
    }
}

/// Separator roles assigned by the grammar scan.
#[derive(Debug)]
struct Shape {
    groups: Vec<Span>,
    decimal: Option<Span>,
}

/// Reduce `input` to its canonical numeric form.
///
/// # Errors
///
/// - [`ParseError::NoDigit`] if `input` has no ASCII digit.
/// - [`ParseError::GrammarMismatch`] if the text is not a grouped numeric
///   literal.
/// - [`ParseError::SeparatorAmbiguity`] if the separators are ambiguous and
///   mixed in a way their positions cannot resolve, as in `"123,23.234"`.
pub fn canonicalize(input: &str, config: &PatternConfig) -> Result<Canonical> {
    if !input.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ParseError::NoDigit {
            input: input.to_string(),
        });
    }

    let symbol_len = config.currency().leading_len(input);
    let rest = &input[symbol_len.unwrap_or(0)..];
    trace!(input, rest, currency = symbol_len.is_some(), "removed currency symbol");

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let body = pad_decimal(rest, config);
    trace!(body = %body, negative, "padded decimal separators");

    let Some(shape) = scan_grammar(&body, config) else {
        return Err(grammar_error(input, &body, config));
    };

    let unsigned = if config.is_ambiguous() {
        resolve_by_arity(&body, config.digit_separator()).ok_or_else(|| {
            ParseError::SeparatorAmbiguity {
                input: input.to_string(),
            }
        })?
    } else {
        substitute(&body, &shape)
    };

    let value = if negative {
        format!("-{unsigned}")
    } else {
        unsigned
    };
    trace!(input, canonical = %value, "canonicalized numeric literal");

    Ok(Canonical {
        value,
        had_currency: symbol_len.is_some(),
    })
}

/// Remove the currency symbol and every digit separator, and turn the last
/// decimal separator into `.`, without validating the result.
///
/// # Errors
///
/// Returns [`ParseError::SeparatorAmbiguity`] when the config does not
/// distinguish digit and decimal separators.
pub fn substitute_separators(input: &str, config: &PatternConfig) -> Result<String> {
    if config.is_ambiguous() {
        return Err(ParseError::SeparatorAmbiguity {
            input: input.to_string(),
        });
    }

    let rest = &input[config.currency().leading_len(input).unwrap_or(0)..];
    let digit = config.digit_separator();
    let decimal = config.decimal_separator();

    let mut out = String::with_capacity(rest.len());
    let mut last_decimal = None;
    let mut pos = 0;
    while pos < rest.len() {
        if let Some(len) = digit.match_at(rest, pos) {
            pos += len;
        } else if let Some(len) = decimal.match_at(rest, pos) {
            last_decimal = Some(Span {
                start: out.len(),
                len,
            });
            out.push_str(&rest[pos..pos + len]);
            pos += len;
        } else {
            let c = next_char(rest, pos);
            out.push(c);
            pos += c.len_utf8();
        }
    }
    if let Some(span) = last_decimal {
        out.replace_range(span.start..span.end(), ".");
    }
    Ok(out)
}

/// Prepend `0` to a leading decimal separator and apply the trailing
/// decimal policy to a dangling one.
fn pad_decimal(rest: &str, config: &PatternConfig) -> String {
    let decimal = config.decimal_separator();
    let mut body = String::with_capacity(rest.len() + 3);
    if decimal.match_at(rest, 0).is_some() {
        body.push('0');
    }
    body.push_str(rest);
    if let Some(start) = decimal.match_at_end(&body) {
        match config.trailing_decimal() {
            TrailingDecimal::AppendZeros => body.push_str("00"),
            TrailingDecimal::Drop => body.truncate(start),
        }
    }
    body
}

/// Match `body` against the grouped-numeric grammar.
///
/// Groups are taken greedily and given back one at a time until the rest
/// is an optional decimal separator followed by digits.
fn scan_grammar(body: &str, config: &PatternConfig) -> Option<Shape> {
    let digit = config.digit_separator();
    let decimal = config.decimal_separator();

    let integral = leading_digits(body);
    if integral == 0 {
        return None;
    }

    let mut groups = Vec::new();
    let mut pos = integral;
    while let Some(len) = digit.match_at(body, pos) {
        let group_end = pos + len + GROUP_DIGITS;
        let is_group = body
            .as_bytes()
            .get(pos + len..group_end)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_digit));
        if !is_group {
            break;
        }
        groups.push(Span { start: pos, len });
        pos = group_end;
    }

    loop {
        if all_digits(&body[pos..]) {
            return Some(Shape {
                groups,
                decimal: None,
            });
        }
        if let Some(len) = decimal.match_at(body, pos)
            && all_digits(&body[pos + len..])
        {
            return Some(Shape {
                groups,
                decimal: Some(Span { start: pos, len }),
            });
        }
        pos = groups.pop()?.start;
    }
}

fn grammar_error(input: &str, body: &str, config: &PatternConfig) -> ParseError {
    if config.is_ambiguous() && has_mixed_separators(body, config.digit_separator()) {
        ParseError::SeparatorAmbiguity {
            input: input.to_string(),
        }
    } else {
        ParseError::GrammarMismatch {
            input: input.to_string(),
        }
    }
}

/// True when `body` is only digits and separators, and the separators are
/// spelled in more than one way.
fn has_mixed_separators(body: &str, separator: &SeparatorMatcher) -> bool {
    let mut spellings: Vec<&str> = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        if body.as_bytes()[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }
        let Some(len) = separator.match_at(body, pos) else {
            return false;
        };
        let spelling = &body[pos..pos + len];
        if !spellings.contains(&spelling) {
            spellings.push(spelling);
        }
        pos += len;
    }
    spellings.len() > 1
}

/// Assign roles to ambiguous separators from their count and positions.
///
/// Returns `None` when the last two separators are spelled the same but an
/// earlier one is not.
fn resolve_by_arity(body: &str, separator: &SeparatorMatcher) -> Option<String> {
    let spans = find_separators(body, separator);
    let spelling = |span: &Span| &body[span.start..span.end()];

    match spans.as_slice() {
        [] => Some(body.to_string()),
        [only] => {
            let before = &body[..only.start];
            let after = &body[only.end()..];
            if before.len() <= GROUP_DIGITS && after.len() == GROUP_DIGITS {
                Some(format!("{before}{after}"))
            } else {
                Some(format!("{before}.{after}"))
            }
        }
        [.., previous, last] => {
            let before: String = body[..last.start]
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            let after = &body[last.end()..];
            if spelling(previous) != spelling(last) {
                Some(format!("{before}.{after}"))
            } else if spans.iter().all(|span| spelling(span) == spelling(last)) {
                Some(format!("{before}{after}"))
            } else {
                None
            }
        }
    }
}

/// Left-to-right, non-overlapping separator matches.
fn find_separators(body: &str, separator: &SeparatorMatcher) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        match separator.match_at(body, pos) {
            Some(len) => {
                spans.push(Span { start: pos, len });
                pos += len;
            }
            None => pos += next_char(body, pos).len_utf8(),
        }
    }
    spans
}

fn substitute(body: &str, shape: &Shape) -> String {
    let mut out = String::with_capacity(body.len());
    let mut pos = 0;
    for span in &shape.groups {
        out.push_str(&body[pos..span.start]);
        pos = span.end();
    }
    if let Some(span) = shape.decimal {
        out.push_str(&body[pos..span.start]);
        out.push('.');
        pos = span.end();
    }
    out.push_str(&body[pos..]);
    out
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// The char starting at byte `pos`; `pos` is always a char boundary.
fn next_char(s: &str, pos: usize) -> char {
    s[pos..].chars().next().unwrap_or_default()
}
