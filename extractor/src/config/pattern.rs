//! Field pattern configuration.
//!
//! A [`FieldPattern`] names the label the scanner looks for and the characters
//! that terminate a value span. The default pattern matches `HeartRate=<value>`
//! fields delimited by `;` or `|`.

use crate::extract::is_log_whitespace;
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Label matched by the default pattern.
pub const DEFAULT_LABEL: &str = "HeartRate";

/// Value delimiters used by the default pattern.
pub const DEFAULT_DELIMITERS: &[char] = &[';', '|'];

/// Errors that can occur when building a [`FieldPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The label is empty.
    #[error("Field label cannot be empty")]
    EmptyLabel,

    /// The label contains a character that can never be part of a matched label.
    #[error("Field label cannot contain {0:?}")]
    InvalidLabelChar(char),

    /// No delimiters were given.
    #[error("At least one value delimiter is required")]
    NoDelimiters,

    /// `=` cannot terminate a value span.
    #[error("Invalid value delimiter {0:?}")]
    InvalidDelimiter(char),
}

/// Label and delimiter set used to locate field occurrences.
///
/// # Example
///
/// ```
/// use extractor::config::FieldPattern;
///
/// let pattern = FieldPattern::default();
/// assert_eq!(pattern.label(), "HeartRate");
/// assert!(pattern.is_delimiter(';'));
/// assert!(pattern.is_delimiter('|'));
///
/// let spo2 = FieldPattern::new("SpO2", vec![',']).unwrap();
/// assert!(spo2.is_delimiter(','));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPattern {
    label: Cow<'static, str>,
    delimiters: Cow<'static, [char]>,
}

impl FieldPattern {
    /// Creates a validated field pattern.
    ///
    /// # Arguments
    ///
    /// * `label` - The field label, matched case-insensitively
    /// * `delimiters` - Characters that end a value span
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The label is empty
    /// - The label contains whitespace, `=`, or one of the delimiters
    /// - The delimiter set is empty
    /// - A delimiter is `=`
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        delimiters: impl Into<Cow<'static, [char]>>,
    ) -> Result<Self, ConfigError> {
        let pattern = Self {
            label: label.into(),
            delimiters: delimiters.into(),
        };
        pattern.validate()?;
        Ok(pattern)
    }

    /// The field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The value delimiters.
    #[must_use]
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Returns true if `c` terminates a value span.
    #[must_use]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Validates the pattern.
    ///
    /// # Errors
    ///
    /// See [`FieldPattern::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        if self.delimiters.is_empty() {
            return Err(ConfigError::NoDelimiters);
        }
        if self.is_delimiter('=') {
            return Err(ConfigError::InvalidDelimiter('='));
        }
        if let Some(c) = self
            .label
            .chars()
            .find(|&c| c == '=' || is_log_whitespace(c) || self.is_delimiter(c))
        {
            return Err(ConfigError::InvalidLabelChar(c));
        }
        Ok(())
    }
}

impl Default for FieldPattern {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed(DEFAULT_LABEL),
            delimiters: Cow::Borrowed(DEFAULT_DELIMITERS),
        }
    }
}
