// EventDripper - webhook verification for the EventDripper event-dispatch service
//
// This library verifies signed notifications delivered to webhook endpoints
// and, with the `client` feature, submits events to the service.

// Re-export webhook verification
pub use eventdripper_webhooks::*;

// Re-export optional crates
#[cfg(feature = "client")]
pub use eventdripper_client;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Event, Notification, SignedHeader, VerifierConfig, WebhookError, WebhookReceiver,
        WebhookSigner, construct_notification,
    };

    #[cfg(feature = "client")]
    pub use crate::eventdripper_client::{ClientConfig, EventDripperClient};
}
