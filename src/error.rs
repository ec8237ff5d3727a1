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

    /// Persistence file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Console input that could not be read
    #[error("{message}")]
    Input {
        kind: std::io::ErrorKind,
        message: String,
    },

    /// Amount input that is not a number
    #[error("Invalid input. Amount must be numeric.")]
    InvalidAmount(String),

    /// Expense number input that is not a number
    #[error("Invalid input. Please enter a valid expense number.")]
    InvalidIndex(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Nothing has been recorded yet
    #[error("No expenses recorded yet.")]
    NoExpenses,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl ExpenseError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense numbers
    pub fn expense_not_found(number: i64) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: number.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Create an input error from a failed console read
    pub fn input(err: &std::io::Error) -> Self {
        Self::Input {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Check if this is a console read failure caused by undecodable input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Input {
                kind: std::io::ErrorKind::InvalidData,
                ..
            }
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

impl From<rust_xlsxwriter::XlsxError> for ExpenseError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::category_not_found("travel");
        assert_eq!(err.to_string(), "Category not found: travel");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(
            ExpenseError::InvalidIndex("x".into()).to_string(),
            "Invalid input. Please enter a valid expense number."
        );
        assert_eq!(
            ExpenseError::InvalidAmount("abc".into()).to_string(),
            "Invalid input. Amount must be numeric."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_input_error_keeps_kind() {
        let io_err = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let err = ExpenseError::input(&io_err);
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "stream did not contain valid UTF-8");

        let broken = ExpenseError::input(&std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(!broken.is_invalid_input());
    }
}
