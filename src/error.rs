//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount text could not be parsed as a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Index text could not be parsed as an integer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Index parsed but does not address an expense in the ledger
    #[error("Index {index} is out of range (ledger has {len} expenses)")]
    IndexOutOfRange { index: i64, len: usize },

    /// Backing file exists but could not be read or parsed
    #[error("Malformed storage: {0}")]
    MalformedStorage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create an "invalid amount" error for the given raw input
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::InvalidAmount(raw.into())
    }

    /// Create an "invalid input" error for the given raw input
    pub fn invalid_input(raw: impl Into<String>) -> Self {
        Self::InvalidInput(raw.into())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
