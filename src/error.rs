//! Error types for the analytics pipeline
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application. The rating engine itself is infallible by design;
//! these errors belong to the pipeline around it (ingestion, configuration,
//! artifact export).

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific pipeline scenarios
#[derive(Debug, thiserror::Error)]
pub enum CrickeloError {
    #[error("failed to read match archive {path}: {message}")]
    Ingest { path: String, message: String },

    #[error("malformed match row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("failed to write artifact {path}: {message}")]
    Export { path: String, message: String },
}
