//! Error types for wellspring-core

use thiserror::Error;

/// Main error type for the wellspring-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while reading a records snapshot or writing a report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for wellspring-core
pub type Result<T> = std::result::Result<T, Error>;
