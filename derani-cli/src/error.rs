//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Dataset file is not a JSON object of string values
    InvalidDataset(String),
    /// A message failed to decode
    DecodeFailed {
        /// Dataset key of the failing message
        key: String,
        /// Underlying decode error
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidDataset(msg) => write!(f, "Invalid dataset: {msg}"),
            CliError::DecodeFailed { key, message } => {
                write!(f, "Failed to decode '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
