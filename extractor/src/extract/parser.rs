//! Field and value parsers using nom.
//!
//! A field occurrence looks like `HeartRate = 72bpm ;`. Parsing is split into
//! stages so each policy decision can be tested on its own:
//!
//! 1. [`field_occurrence`] matches `<label> <ws>* '=' <value span>` at the start
//!    of its input.
//! 2. [`raw_value`] trims the value span.
//! 3. [`leading_digits`] takes the maximal run of ASCII digits.
//! 4. [`parse_reading`] turns that run into a positive integer.

use crate::config::FieldPattern;
use crate::models::Rejection;
use nom::{
    bytes::complete::{take, take_till1, take_while},
    character::complete::{char, digit1},
    combinator::verify,
    IResult, Parser,
};

/// Whitespace as understood by the log field grammar.
///
/// Unicode `White_Space` without U+0085 (NEL), plus U+FEFF (BOM).
#[must_use]
pub fn is_log_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Matches one field occurrence at the start of `input`.
///
/// Returns the remaining input and the value span. The span starts after the
/// whitespace following `=` and runs up to the first delimiter or end of
/// input. When that whitespace is directly followed by a delimiter (or the
/// end), the span is the last whitespace character that is not itself a
/// delimiter, so it is non-empty but may consist of whitespace only.
pub(crate) fn field_occurrence<'a>(
    pattern: &FieldPattern,
    input: &'a str,
) -> IResult<&'a str, &'a str> {
    let (input, _) = label(pattern, input)?;
    let (input, _) = take_while(is_log_whitespace).parse(input)?;
    let (input, _) = char('=').parse(input)?;
    let (after_ws, _) = take_while(is_log_whitespace).parse(input)?;

    let value: IResult<&'a str, &'a str> =
        take_till1(|c| pattern.is_delimiter(c)).parse(after_ws);
    if value.is_ok() {
        return value;
    }

    // Give whitespace back, one character at a time from the right, until one
    // can start a value.
    let skipped = &input[..input.len() - after_ws.len()];
    match skipped
        .char_indices()
        .rev()
        .find(|&(_, c)| !pattern.is_delimiter(c))
    {
        Some((offset, c)) => {
            let end = offset + c.len_utf8();
            Ok((&input[end..], &input[offset..end]))
        }
        None => value,
    }
}

// Labels match with ASCII case folding only; any other character must match
// exactly.
fn label<'a>(pattern: &FieldPattern, input: &'a str) -> IResult<&'a str, &'a str> {
    let expected = pattern.label();
    verify(take(expected.chars().count()), |candidate: &str| {
        candidate.eq_ignore_ascii_case(expected)
    })
    .parse(input)
}

/// Trims log whitespace from both ends of a value span.
///
/// # Examples
///
/// ```
/// use extractor::extract::raw_value;
///
/// assert_eq!(raw_value("  85 "), "85");
/// assert_eq!(raw_value(" \t"), "");
/// ```
#[must_use]
pub fn raw_value(span: &str) -> &str {
    span.trim_matches(is_log_whitespace)
}

/// Returns the longest prefix of `raw` made of ASCII digits, if any.
///
/// # Examples
///
/// ```
/// use extractor::extract::leading_digits;
///
/// assert_eq!(leading_digits("72bpm"), Some("72"));
/// assert_eq!(leading_digits("98.6"), Some("98"));
/// assert_eq!(leading_digits("N/A"), None);
/// ```
#[must_use]
pub fn leading_digits(raw: &str) -> Option<&str> {
    digit1::<_, nom::error::Error<&str>>(raw)
        .ok()
        .map(|(_, digits)| digits)
}

/// Parses a trimmed raw value into a reading.
///
/// # Errors
///
/// Returns a [`Rejection`] if:
/// - The value does not begin with an ASCII digit
/// - The leading digits parse to zero
///
/// Leading digits too large for a `u64` saturate to `u64::MAX`.
///
/// # Examples
///
/// ```
/// use extractor::extract::parse_reading;
/// use extractor::models::Rejection;
///
/// assert_eq!(parse_reading("100bpm"), Ok(100));
/// assert_eq!(parse_reading("0"), Err(Rejection::NotPositive));
/// assert_eq!(parse_reading("error"), Err(Rejection::NotNumeric));
/// ```
pub fn parse_reading(raw: &str) -> Result<u64, Rejection> {
    let digits = leading_digits(raw).ok_or(Rejection::NotNumeric)?;
    // `digits` is a non-empty ASCII digit run, so parsing only fails on overflow.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);

    if value == 0 {
        return Err(Rejection::NotPositive);
    }

    Ok(value)
}
