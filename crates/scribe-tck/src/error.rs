//! Conformance kit error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conformance operations
pub type Result<T> = std::result::Result<T, TckError>;

/// Errors that stop a conformance run
///
/// Every variant is fatal: the harness reports the first one it meets and
/// never continues past it.
#[derive(Error, Debug)]
pub enum TckError {
    /// Rule document, suite layout or fixture set is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fixture file could not be read
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A produced record violates a structural rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Extractor output diverges from a golden fixture
    #[error("L1 mismatch for {fixture}: {detail}\n  actual:   {actual}\n  expected: {expected}")]
    ComparatorMismatch {
        /// Fixture case name
        fixture: String,
        /// What diverged
        detail: String,
        /// Normalized actual outcome
        actual: String,
        /// Normalized expected outcome
        expected: String,
    },

    /// Non-determinism or a cross-record invariant breach
    #[error("Property violation: {0}")]
    PropertyViolation(String),
}

impl TckError {
    /// Stable kind name of this error
    pub fn kind(&self) -> &'static str {
        match self {
            TckError::Config(_) => "ConfigError",
            TckError::Io { .. } => "IoError",
            TckError::Validation(_) => "ValidationError",
            TckError::ComparatorMismatch { .. } => "ComparatorMismatch",
            TckError::PropertyViolation(_) => "PropertyViolation",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TckError::Io {
            path: path.into(),
            source,
        }
    }
}
