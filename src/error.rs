//! Custom error types for the issue importer.
//!
//! Only conditions that abort a whole run are represented here. A row that
//! is skipped or an issue the tracker refuses to create is reported through
//! the run summary instead and never becomes an [`ImporterError`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for importer operations.
#[derive(Error, Debug)]
pub enum ImporterError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // Input errors
    #[error("CSV file not found at '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read CSV input at row {row}: {source}")]
    InputRead {
        row: usize,
        #[source]
        source: csv::Error,
    },

    // Row failure escalated by fail-fast
    #[error("Issue creation failed for row {row}: {message}")]
    SubmissionFailed { row: usize, message: String },

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ImporterError
pub type Result<T> = std::result::Result<T, ImporterError>;

impl ImporterError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an input read error for the row that was being read
    pub fn input_read(row: usize, source: csv::Error) -> Self {
        Self::InputRead { row, source }
    }

    /// Create a submission failure error
    pub fn submission_failed(row: usize, message: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            row,
            message: message.into(),
        }
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for ImporterError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
