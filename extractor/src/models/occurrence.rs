//! Field occurrence model.
//!
//! Defines what the scanner finds in the input and what the value parser
//! decides about each find.

use serde::Serialize;
use thiserror::Error;

/// One matched `<label>=<value>` span in the input.
///
/// Offsets are byte offsets into the scanned string. `value` is the text
/// after `=` and any whitespace following it, up to the next delimiter (or
/// end of input). It keeps trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOccurrence<'a> {
    /// Byte offset of the first character of the label.
    pub start: usize,
    /// Byte offset just past the value span.
    pub end: usize,
    /// The value span, including trailing whitespace.
    pub value: &'a str,
}

/// Why an occurrence produced no reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The trimmed value does not begin with an ASCII digit.
    #[error("value has no leading digits")]
    NotNumeric,

    /// The leading digits parse to zero.
    #[error("value is not positive")]
    NotPositive,
}

/// Result of parsing one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The occurrence yielded a reading.
    Accepted {
        /// The parsed reading.
        value: u64,
    },
    /// The occurrence was omitted from the result.
    Rejected {
        /// Why it was omitted.
        reason: Rejection,
    },
}

impl Outcome {
    /// Returns the accepted value, if any.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Accepted { value } => Some(*value),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<Result<u64, Rejection>> for Outcome {
    fn from(result: Result<u64, Rejection>) -> Self {
        match result {
            Ok(value) => Self::Accepted { value },
            Err(reason) => Self::Rejected { reason },
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { value } => write!(f, "accepted {value}"),
            Self::Rejected { reason } => write!(f, "rejected ({reason})"),
        }
    }
}

/// A field occurrence together with its trimmed raw value and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inspection<'a> {
    /// Where the field was found.
    pub occurrence: FieldOccurrence<'a>,
    /// The value span with surrounding whitespace removed.
    pub raw: &'a str,
    /// What the value parser decided.
    pub outcome: Outcome,
}
