//! Extraction report model.

use serde::Serialize;

/// Summary of one extraction pass.
///
/// Unlike the plain value list, a report tells an input with no matching
/// fields (`occurrences == 0`) apart from one where every field was rejected
/// (`occurrences > 0` and `values` empty).
///
/// # Example
///
/// ```
/// use extractor::Extractor;
///
/// let report = Extractor::default().report("HeartRate=72; HeartRate=error");
/// assert_eq!(report.values, vec![72]);
/// assert_eq!(report.occurrences, 2);
/// assert_eq!(report.rejected, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Accepted readings in order of appearance.
    pub values: Vec<u64>,
    /// Number of field occurrences found.
    pub occurrences: usize,
    /// Number of occurrences omitted from `values`.
    pub rejected: usize,
}

impl ExtractionReport {
    /// Returns true if no field occurrence was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences == 0
    }

    /// Returns true if fields were found but none produced a reading.
    #[must_use]
    pub fn all_rejected(&self) -> bool {
        self.occurrences > 0 && self.values.is_empty()
    }
}
