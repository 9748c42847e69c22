//! Pulselog Extractor Library
//!
//! This crate finds heart-rate readings embedded in free-form log text.
//! It scans for `HeartRate=<value>` fields, keeps the leading digits of each
//! value, and returns the positive readings in order of appearance.
//!
//! # Modules
//!
//! - [`extract`] - Field scanning, value parsing, and the [`Extractor`]
//! - [`models`] - Occurrence, outcome, and report types
//! - [`config`] - Field label and delimiter configuration
//!
//! # Example
//!
//! ```
//! use extractor::extract_heart_rates;
//!
//! let log = "LOG_01: HeartRate=72bpm; STATUS=OK \
//!            | LOG_02: HeartRate= 85 ; STATUS=WARN \
//!            | LOG_03: HeartRate=error; STATUS=FAIL";
//!
//! assert_eq!(extract_heart_rates(log), vec![72, 85]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod extract;
pub mod models;

pub use extract::{
    extract_heart_rates, extract_heart_rates_from_bytes, extract_heart_rates_opt, Extractor,
};
