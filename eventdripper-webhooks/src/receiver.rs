//! Webhook receiver for verifying incoming notifications

use crate::signature::{compute_signature, verify};
use crate::{Notification, Result, SignedHeader, VerifierConfig, WebhookError};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Verify a delivery and decode its notification.
///
/// `payload` is the raw request body, `header` the signature header sent
/// with it. The notification is only returned if the header parses, its
/// timestamp is inside the configured tolerance window and one of its
/// signatures matches.
pub fn construct_notification(
    payload: &str,
    header: &str,
    secret: &str,
    config: &VerifierConfig,
) -> Result<Notification> {
    construct_notification_at(payload, header, secret, config, Utc::now())
}

/// Same as [`construct_notification`], checking the tolerance window
/// against `now` instead of the system clock.
pub fn construct_notification_at(
    payload: &str,
    header: &str,
    secret: &str,
    config: &VerifierConfig,
    now: DateTime<Utc>,
) -> Result<Notification> {
    let signed_header = SignedHeader::parse(header).inspect_err(|e| {
        warn!(reason = e.reason(), "Rejected webhook with invalid signature header");
    })?;

    debug!(
        timestamp = signed_header.timestamp(),
        signatures = signed_header.signatures().len(),
        "Parsed webhook signature header"
    );

    // Only timestamps that are too old are rejected; future timestamps fall
    // through to the signature check.
    if config.tolerance_enabled() {
        let oldest = now.timestamp().saturating_sub_unsigned(config.tolerance_secs);
        if signed_header.timestamp() < oldest {
            warn!(
                timestamp = signed_header.timestamp(),
                tolerance_secs = config.tolerance_secs,
                "Rejected webhook with expired signature"
            );
            return Err(WebhookError::SignatureExpired {
                timestamp: signed_header.timestamp(),
                tolerance_secs: config.tolerance_secs,
            });
        }
    }

    let expected = compute_signature(secret, signed_header.timestamp(), payload);

    let matched = signed_header
        .signatures()
        .iter()
        .any(|candidate| verify(&expected, candidate));
    if !matched {
        warn!(
            timestamp = signed_header.timestamp(),
            "Rejected webhook with no matching signature"
        );
        return Err(WebhookError::InvalidSignature);
    }

    let notification = Notification::from_payload(payload).inspect_err(|e| {
        warn!(error = %e, "Rejected signed webhook with invalid payload");
    })?;

    debug!(
        trigger_name = notification.trigger_name(),
        entity_id = notification.entity_id(),
        events = notification.events().len(),
        "Verified webhook notification"
    );

    Ok(notification)
}

/// Receiver for incoming notifications
#[derive(Clone)]
pub struct WebhookReceiver {
    secret: String,
    config: VerifierConfig,
}

impl WebhookReceiver {
    /// Create a new receiver with the given secret and configuration
    pub fn new(secret: impl Into<String>, config: VerifierConfig) -> Self {
        Self {
            secret: secret.into(),
            config,
        }
    }

    /// Set the timestamp tolerance in seconds
    pub fn with_tolerance(mut self, seconds: u64) -> Self {
        self.config.tolerance_secs = seconds;
        self
    }

    /// Verify an incoming delivery and decode its notification
    pub fn construct_notification(&self, payload: &str, header: &str) -> Result<Notification> {
        construct_notification(payload, header, &self.secret, &self.config)
    }

    /// Verify an incoming delivery against an explicit clock reading
    pub fn construct_notification_at(
        &self,
        payload: &str,
        header: &str,
        now: DateTime<Utc>,
    ) -> Result<Notification> {
        construct_notification_at(payload, header, &self.secret, &self.config, now)
    }

    /// Get the configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }
}

impl std::fmt::Debug for WebhookReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookReceiver")
            .field("secret", &"[REDACTED]")
            .field("config", &self.config)
            .finish()
    }
}
