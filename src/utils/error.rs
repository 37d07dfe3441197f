//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request exception: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP error occurred: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Failed to read response body: {0}")]
    BodyUnreadable(String),
}

/// Errors raised by table operations on the aggregated data
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while opening a rendered chart
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to launch viewer {program}: {source}")]
    ViewerFailed {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("Opening files is not supported on this platform")]
    UnsupportedPlatform,
}
