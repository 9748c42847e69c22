//! Data models for the extractor.
//!
//! This module contains the field occurrence, outcome, and report types.

pub mod occurrence;
pub mod report;

pub use occurrence::{FieldOccurrence, Inspection, Outcome, Rejection};
pub use report::ExtractionReport;
