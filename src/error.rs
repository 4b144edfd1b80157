//! Custom error types for the cash calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cash calculator operations
#[derive(Error, Debug)]
pub enum CashError {
    /// A computation received an argument outside its domain
    /// (negative count, negative expected amount, non-positive face value)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A count update targeted a face value the register does not hold
    #[error("Denomination {0} is not supported")]
    UnsupportedDenomination(i64),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl CashError {
    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an unsupported denomination error
    pub fn is_unsupported_denomination(&self) -> bool {
        matches!(self, Self::UnsupportedDenomination(_))
    }
}

impl From<std::io::Error> for CashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cash calculator operations
pub type CashResult<T> = Result<T, CashError>;
