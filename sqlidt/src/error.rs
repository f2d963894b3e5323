//! Error handling module for the sqlidt CLI.
//!
//! Errors are `thiserror` enums; identifier errors from the library convert
//! in with `?`.

use sqlident_lex::IdentifierError;
use thiserror::Error;

/// Main error type for the sqlidt CLI application.
#[derive(Error, Debug)]
pub enum SqlidtError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails, or when arguments were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when an identifier cannot be matched or decoded.
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SqlidtError.
pub type Result<T> = std::result::Result<T, SqlidtError>;
