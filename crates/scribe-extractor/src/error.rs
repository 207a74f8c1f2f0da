//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// Text cannot produce a valid term (no topic identifiers)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Stable kind name, as named by golden fixtures' `expect_error`
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractorError::InvalidInput(_) => "InvalidInput",
            ExtractorError::Config(_) => "ConfigError",
        }
    }

    /// Message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            ExtractorError::InvalidInput(message) | ExtractorError::Config(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_drops_prefix() {
        let err = ExtractorError::InvalidInput("No topics found".to_string());
        assert_eq!(err.to_string(), "Invalid input: No topics found");
        assert_eq!(err.message(), "No topics found");
        assert_eq!(err.kind(), "InvalidInput");
    }
}
