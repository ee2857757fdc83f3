//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A snapshot file could not be parsed.
    #[error("Invalid snapshot {path}: {reason}")]
    InvalidSnapshot {
        /// File that failed to parse.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation reported errors.
    #[error("Validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
