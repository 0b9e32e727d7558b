//! Custom error types for TrustComply
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Note that ordinary rule failures (a prohibited payment method, an overdrawn
//! withdrawal) are not errors in this sense: the validators report them as
//! structured `ValidationResult`/`ComplianceIssue` values. `TrustError` covers
//! the operational failures around the rules engine: unreadable input files,
//! malformed JSON, bad CLI arguments.

use thiserror::Error;

/// The main error type for TrustComply operations
#[derive(Error, Debug)]
pub enum TrustError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input that cannot be turned into a checkable transaction or account
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pre-check found blocking compliance errors
    #[error("Compliance check failed: {0}")]
    CheckFailed(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Policy file errors
    #[error("Policy error: {0}")]
    Policy(String),
}

impl TrustError {
    /// Create an invalid-input error for a named field
    pub fn invalid_field(field: &str, detail: impl Into<String>) -> Self {
        Self::InvalidInput(format!("{}: {}", field, detail.into()))
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a failed compliance check
    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::CheckFailed(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrustError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrustError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for TrustComply operations
pub type TrustResult<T> = Result<T, TrustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrustError::Config("missing policy file".into());
        assert_eq!(err.to_string(), "Configuration error: missing policy file");
    }

    #[test]
    fn test_invalid_field() {
        let err = TrustError::invalid_field("amount", "not a number");
        assert_eq!(err.to_string(), "Invalid input: amount: not a number");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_check_failed() {
        let err = TrustError::CheckFailed("2 blocking errors".into());
        assert!(err.is_check_failure());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trust_err: TrustError = io_err.into();
        assert!(matches!(trust_err, TrustError::Io(_)));
    }
}
