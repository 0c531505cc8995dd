//! Error types for the SMS filter.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Machine-readable code reported for any inbox read failure.
pub const SMS_READ_ERROR: &str = "SMS_READ_ERROR";

/// The inbox could not be queried.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The host refused access to the inbox
    #[error("Permission denied reading SMS inbox: {0}")]
    PermissionDenied(String),

    /// The content source is missing or failed
    #[error("SMS inbox unavailable: {0}")]
    Unavailable(String),

    /// Failed to open or read the inbox export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Inbox export is not valid CSV
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks one of the projected columns
    #[error("Inbox export is missing required columns: {0}")]
    MissingColumns(String),
}

impl ReadError {
    /// Machine-readable error code, stable across variants.
    pub fn code(&self) -> &'static str {
        SMS_READ_ERROR
    }
}

/// Invalid filter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Sender identifier must not be empty")]
    EmptySender,

    #[error("At least one keyword is required")]
    NoKeywords,

    #[error("Keyword at position {0} is blank")]
    BlankKeyword(usize),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Errors that can occur while running the filter end to end.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading the inbox failed
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the result failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output encoding failed
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output encoding failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
