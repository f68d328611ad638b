//! Error types for webhook verification

use thiserror::Error;

/// Errors that can occur while verifying an incoming notification
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Signature header could not be parsed
    #[error("Invalid signature header: {0}")]
    InvalidHeader(#[from] HeaderError),

    /// Signed timestamp is older than the tolerance window allows
    #[error("Signature expired: timestamp {timestamp} is older than {tolerance_secs} seconds")]
    SignatureExpired { timestamp: i64, tolerance_secs: u64 },

    /// No candidate signature matched the expected one
    #[error("No signature matched the expected signature")]
    InvalidSignature,

    /// Payload was signed correctly but could not be decoded
    #[error("Invalid payload format: {0}")]
    InvalidPayloadFormat(#[from] PayloadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Reasons a signature header is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("empty header")]
    Empty,

    #[error("invalid format")]
    InvalidFormat,

    #[error("invalid timestamp format")]
    InvalidTimestamp,

    #[error("missing fields")]
    MissingFields,
}

impl HeaderError {
    /// Short machine-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty header",
            Self::InvalidFormat => "invalid format",
            Self::InvalidTimestamp => "invalid timestamp format",
            Self::MissingFields => "missing fields",
        }
    }
}

/// Underlying cause of an invalid payload
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Not JSON, a required field is missing, or a field has the wrong type
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An event's `data` is not valid standard base64
    #[error("event {index}: malformed base64 data: {source}")]
    Base64 {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },

    /// An event's `at` is not a valid RFC 3339 timestamp
    #[error("event {index}: malformed timestamp: {source}")]
    Timestamp {
        index: usize,
        #[source]
        source: chrono::ParseError,
    },
}
