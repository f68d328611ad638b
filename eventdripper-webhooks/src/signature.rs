//! Webhook signature generation and verification

use crate::SignedHeader;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature for a payload sent at `timestamp`.
///
/// The signed string is `"{timestamp}.{payload}"`, keyed by `secret` with
/// HMAC-SHA256 and returned as lowercase hex.
pub fn compute_signature(secret: &str, timestamp: i64, payload: &str) -> String {
    let signed_payload = format!("{}.{}", timestamp, payload);

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take any size key");
    mac.update(signed_payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time signature comparison.
///
/// Running time depends only on the length of `candidate`. When the lengths
/// differ the candidate is compared against itself and the result is masked
/// by the length check, so there is no early exit that reveals how much of
/// the candidate was correct.
pub fn verify(expected: &str, candidate: &str) -> bool {
    let expected = expected.as_bytes();
    let candidate = candidate.as_bytes();

    let same_len = (expected.len() as u64).ct_eq(&(candidate.len() as u64));
    let reference = if expected.len() == candidate.len() {
        expected
    } else {
        candidate
    };

    (same_len & reference.ct_eq(candidate)).into()
}

/// Signs payloads with a shared secret
#[derive(Clone)]
pub struct WebhookSigner {
    secret: String,
}

impl WebhookSigner {
    /// Create a new signer with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a payload with a specific timestamp
    pub fn sign(&self, timestamp: i64, payload: &str) -> SignedHeader {
        let signature = compute_signature(&self.secret, timestamp, payload);
        SignedHeader::new(timestamp, vec![signature])
    }

    /// Sign a payload with the current time
    pub fn sign_now(&self, payload: &str) -> SignedHeader {
        self.sign(chrono::Utc::now().timestamp(), payload)
    }
}

impl std::fmt::Debug for WebhookSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
