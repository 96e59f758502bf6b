//! Error types for the fg-core crate.
//!
//! This module provides [`ConfigError`] for configuration loading and
//! validation, and [`ParseValueError`] for string input that falls outside
//! one of the closed filter enumerations.

use camino::Utf8PathBuf;

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use fg_core::ConfigError;
///
/// let error = ConfigError::invalid_option("search.debounce_ms", "must be greater than zero");
/// assert!(error.to_string().contains("debounce_ms"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[must_use]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// A string did not name any member of a closed filter enumeration.
///
/// Raised at the input boundary (CLI flags, scripts, select values). The
/// filter store itself only ever sees typed values.
///
/// # Examples
///
/// ```
/// use fg_core::Genre;
///
/// let err = "Opera".parse::<Genre>().unwrap_err();
/// assert_eq!(err.to_string(), "unknown genre 'Opera'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseValueError {
    /// Which enumeration was being parsed (e.g. "genre").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseValueError {
    /// Creates a new parse error for `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
