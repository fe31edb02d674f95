//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Text input that should have been a number
    #[error("Invalid number: {0}")]
    Format(String),

    /// Validation errors for expense input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The data file exists but does not hold a well-formed expense list
    #[error("Corrupt data file {path}: {message}")]
    Corrupt { path: String, message: String },

    /// Ordinal that does not name an existing expense
    #[error("Invalid selection: '{input}' (expected 1..={count})")]
    InvalidSelection { input: String, count: usize },

    /// Menu or sub-menu input that is not one of the offered choices
    #[error("Invalid option: '{0}'")]
    UnrecognizedChoice(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create an "invalid selection" error for an ordinal input
    pub fn invalid_selection(input: impl Into<String>, count: usize) -> Self {
        Self::InvalidSelection {
            input: input.into(),
            count,
        }
    }

    /// Check if this is an "invalid selection" error
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error comes from rejected user input rather than the system
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::Format(_)
                | Self::Validation(_)
                | Self::InvalidSelection { .. }
                | Self::UnrecognizedChoice(_)
        )
    }
}

// Implement From traits for common error types

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

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
