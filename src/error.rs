//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors on the backing JSON file
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for expense fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Position outside the collection (1-based, as shown to the user)
    #[error("Invalid index {position}: there are {len} expenses")]
    InvalidIndex { position: usize, len: usize },

    /// Amount that does not parse as a number
    #[error("Invalid amount '{0}'. Please enter a numerical value")]
    InvalidAmount(String),

    /// Budget that does not parse as a non-negative number
    #[error("Invalid budget '{0}'. Please enter a non-negative number")]
    InvalidBudget(String),

    /// Month outside 1-12 or not a number
    #[error("Invalid month '{0}'. Please enter a number between 1 and 12")]
    InvalidMonth(String),

    /// CSV export failures, carrying the underlying message
    #[error("Failed to export expenses to CSV. Error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an invalid index error from a 0-based index
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            position: index.saturating_add(1),
            len,
        }
    }

    /// Check if this error was caused by bad user input rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidIndex { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidBudget(_)
                | Self::InvalidMonth(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
