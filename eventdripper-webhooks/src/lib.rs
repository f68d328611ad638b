//! Webhook Verification for EventDripper
//!
//! This crate verifies and decodes the notifications the EventDripper service
//! delivers to webhook endpoints.
//!
//! # Features
//!
//! - **Signature Verification**: HMAC-SHA256 over `"{timestamp}.{payload}"`
//! - **Replay Protection**: Configurable tolerance window on signed timestamps
//! - **Constant-Time Comparison**: Candidate signatures are compared without
//!   leaking where they diverge
//! - **Typed Notifications**: Payloads decode into [`Notification`] values with
//!   parsed timestamps and raw event data
//!
//! # Example: Receiving Notifications
//!
//! ```rust,no_run
//! use eventdripper_webhooks::{VerifierConfig, WebhookReceiver};
//!
//! let receiver = WebhookReceiver::new("your-secret-key", VerifierConfig::default());
//!
//! let payload = r#"{"trigger_name":"t","entity_id":"e","events":[]}"#;
//! let header = "t=1602251283,v1=21b9339c...";
//!
//! match receiver.construct_notification(payload, header) {
//!     Ok(notification) => println!("{} events", notification.events().len()),
//!     Err(e) => eprintln!("rejected delivery: {}", e),
//! }
//! ```
//!
//! # Example: Signing Payloads
//!
//! ```rust
//! use eventdripper_webhooks::{SignedHeader, WebhookSigner};
//!
//! let signer = WebhookSigner::new("secret");
//! let header = signer.sign(421337, "payload");
//!
//! assert_eq!(
//!     header.to_string(),
//!     "t=421337,v1=1ddcaadc64a25cc5053ece8965723309bb6d20ba72f8a1b78fc37a83ae027a29"
//! );
//! assert_eq!(SignedHeader::parse(&header.to_string()).unwrap(), header);
//! ```

mod config;
mod error;
mod header;
mod notification;
mod receiver;
pub mod rfc3339;
mod signature;

pub use config::{TOLERANCE_ENV, VerifierConfig, VerifierConfigBuilder};
pub use error::{HeaderError, PayloadError, WebhookError};
pub use header::SignedHeader;
pub use notification::{Event, Notification};
pub use receiver::{WebhookReceiver, construct_notification, construct_notification_at};
pub use signature::{WebhookSigner, compute_signature, verify};

/// The header key identifying the current signature scheme
pub const SIGNING_VERSION: &str = "v1";

/// Default tolerance window for signed timestamps (in seconds)
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
