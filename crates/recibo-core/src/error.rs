//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
///
/// Field extraction itself never fails (missing fields become sentinel
/// values); errors here cover the surrounding plumbing.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// I/O error while reading input or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error, e.g. a malformed config file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for recibo operations.
pub type Result<T> = std::result::Result<T, ReciboError>;
