//! EventDripper Client
//!
//! Submits events to the EventDripper service, which evaluates its triggers
//! and later delivers signed notifications back to your webhook endpoint
//! (see `eventdripper-webhooks` for the receiving side).
//!
//! # Example
//!
//! ```rust,no_run
//! use eventdripper_client::{ClientConfig, EventDripperClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EventDripperClient::new(ClientConfig::new("api-key"))?;
//!
//!     client.add_event("user-42", "signed_up", b"hello").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::{AddEventRequest, EventDripperClient};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_HOST};
pub use error::ClientError;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
