//! Custom error types for fintrack
//!
//! The three input-validation kinds (budget, expense, date range) are kept
//! distinct so callers can branch on the cause instead of parsing messages.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Malformed or negative budget value
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// Malformed or non-positive amount, blank category, or malformed date
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Malformed date(s) or start after end in a period query
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    pub fn is_invalid_budget(&self) -> bool {
        matches!(self, Self::InvalidBudget(_))
    }

    pub fn is_invalid_expense(&self) -> bool {
        matches!(self, Self::InvalidExpense(_))
    }

    pub fn is_invalid_date_range(&self) -> bool {
        matches!(self, Self::InvalidDateRange(_))
    }

    /// Check if this error came from rejected user input (as opposed to I/O)
    pub fn is_validation(&self) -> bool {
        self.is_invalid_budget() || self.is_invalid_expense() || self.is_invalid_date_range()
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;
