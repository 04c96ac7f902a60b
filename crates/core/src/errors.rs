//! Core error types for the household allocation planner.
//!
//! These errors are transport-agnostic. The server crate maps them onto HTTP
//! responses.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unknown household feature '{0}'")]
    UnknownFeature(String),

    #[error("'{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
}
