//! Configuration for the extractor.
//!
//! This module contains the field pattern (label and value delimiters) that
//! drives the scanner.

pub mod pattern;

pub use pattern::{ConfigError, FieldPattern, DEFAULT_DELIMITERS, DEFAULT_LABEL};
