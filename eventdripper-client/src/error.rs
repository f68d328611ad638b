//! Error types for client operations

use thiserror::Error;

/// Errors that can occur while submitting events
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid host URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Service answered with a non-success status
    #[error("Request rejected with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
