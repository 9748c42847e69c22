//! Heart-rate extraction from free-form log text.
//!
//! The extractor scans a string for `HeartRate=<value>` fields (label matched
//! case-insensitively, whitespace around `=` ignored, value running until `;`,
//! `|`, or end of input), parses the leading digits of each value, and keeps
//! the positive ones in order of appearance. Nothing about malformed input is
//! an error: bad values are simply left out.
//!
//! # Example
//!
//! ```
//! use extractor::extract_heart_rates;
//!
//! let log = "LOG_01: HeartRate=72bpm; STATUS=OK | LOG_02: HeartRate= 85 ; STATUS=WARN";
//! assert_eq!(extract_heart_rates(log), vec![72, 85]);
//! ```

mod parser;
mod scanner;

pub use parser::{is_log_whitespace, leading_digits, parse_reading, raw_value};
pub use scanner::Occurrences;

use crate::config::FieldPattern;
use crate::models::{ExtractionReport, Inspection, Outcome};

/// Extracts field readings from log text using a [`FieldPattern`].
///
/// The extractor holds no state between calls and can be shared freely
/// across threads.
///
/// # Example
///
/// ```
/// use extractor::config::FieldPattern;
/// use extractor::Extractor;
///
/// let extractor = Extractor::default();
/// assert_eq!(extractor.extract("heartrate=65 | HEARTRATE=70"), vec![65, 70]);
///
/// let pulse = Extractor::new(FieldPattern::new("Pulse", vec![',']).unwrap());
/// assert_eq!(pulse.extract("pulse=58, pulse=61bpm"), vec![58, 61]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extractor {
    pattern: FieldPattern,
}

impl Extractor {
    /// Creates an extractor for the given pattern.
    #[must_use]
    pub fn new(pattern: FieldPattern) -> Self {
        Self { pattern }
    }

    /// Returns the field pattern.
    #[must_use]
    pub fn pattern(&self) -> &FieldPattern {
        &self.pattern
    }

    /// Returns an iterator over every field occurrence in `input`, left to right.
    #[must_use]
    pub fn occurrences<'a>(&self, input: &'a str) -> Occurrences<'_, 'a> {
        Occurrences::new(&self.pattern, input)
    }

    /// Returns every field occurrence with its raw value and outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use extractor::models::{Outcome, Rejection};
    /// use extractor::Extractor;
    ///
    /// let inspections = Extractor::default().inspect("HeartRate=55; HeartRate=N/A");
    /// assert_eq!(inspections[0].outcome, Outcome::Accepted { value: 55 });
    /// assert_eq!(
    ///     inspections[1].outcome,
    ///     Outcome::Rejected { reason: Rejection::NotNumeric }
    /// );
    /// ```
    #[must_use]
    pub fn inspect<'a>(&self, input: &'a str) -> Vec<Inspection<'a>> {
        self.inspections(input).collect()
    }

    /// Extracts the accepted readings from `input`, in order of appearance.
    #[must_use]
    pub fn extract(&self, input: &str) -> Vec<u64> {
        self.report(input).values
    }

    /// Extracts readings and counts what was found and what was rejected.
    #[must_use]
    pub fn report(&self, input: &str) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        if input.is_empty() {
            return report;
        }

        for inspection in self.inspections(input) {
            report.occurrences += 1;
            match inspection.outcome {
                Outcome::Accepted { value } => report.values.push(value),
                Outcome::Rejected { reason } => {
                    report.rejected += 1;
                    tracing::trace!(
                        start = inspection.occurrence.start,
                        raw = inspection.raw,
                        %reason,
                        "Skipped field occurrence"
                    );
                }
            }
        }

        tracing::debug!(
            label = self.pattern.label(),
            occurrences = report.occurrences,
            accepted = report.values.len(),
            rejected = report.rejected,
            "Extracted field values"
        );

        report
    }

    fn inspections<'s, 'a: 's>(
        &'s self,
        input: &'a str,
    ) -> impl Iterator<Item = Inspection<'a>> + 's {
        self.occurrences(input).map(|occurrence| {
            let raw = raw_value(occurrence.value);
            Inspection {
                occurrence,
                raw,
                outcome: parse_reading(raw).into(),
            }
        })
    }
}

/// Extracts every valid `HeartRate` reading from a log string.
///
/// Readings are the leading digits of each field value; values without
/// leading digits, or equal to zero, are left out. Empty input yields an
/// empty vector.
///
/// # Examples
///
/// ```
/// use extractor::extract_heart_rates;
///
/// assert_eq!(extract_heart_rates("HeartRate=100bpm"), vec![100]);
/// assert_eq!(extract_heart_rates("HeartRate=error; HeartRate=invalid"), Vec::<u64>::new());
/// assert!(extract_heart_rates("").is_empty());
/// ```
#[must_use]
pub fn extract_heart_rates(input: &str) -> Vec<u64> {
    Extractor::default().extract(input)
}

/// Like [`extract_heart_rates`], treating a missing input as empty.
#[must_use]
pub fn extract_heart_rates_opt(input: Option<&str>) -> Vec<u64> {
    input.map(extract_heart_rates).unwrap_or_default()
}

/// Like [`extract_heart_rates`] for raw bytes.
///
/// Bytes that are not valid UTF-8 are not text and yield an empty vector.
///
/// # Examples
///
/// ```
/// use extractor::extract_heart_rates_from_bytes;
///
/// assert_eq!(extract_heart_rates_from_bytes(b"HeartRate=72"), vec![72]);
/// assert!(extract_heart_rates_from_bytes(&[0xff, 0xfe, b'7']).is_empty());
/// ```
#[must_use]
pub fn extract_heart_rates_from_bytes(input: &[u8]) -> Vec<u64> {
    match std::str::from_utf8(input) {
        Ok(text) => extract_heart_rates(text),
        Err(e) => {
            tracing::debug!(error = %e, "Input is not valid UTF-8, nothing extracted");
            Vec::new()
        }
    }
}
