//! Client for submitting events

use crate::{ClientConfig, ClientError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// JSON body of an `add_event` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddEventRequest {
    /// Entity the event belongs to
    pub entity_id: String,

    /// Event name
    pub event_name: String,

    /// Standard base64 of the event data
    pub data: String,
}

impl AddEventRequest {
    /// Build a request, base64-encoding the raw event data
    pub fn new(entity_id: impl Into<String>, event_name: impl Into<String>, data: &[u8]) -> Self {
        Self {
            entity_id: entity_id.into(),
            event_name: event_name.into(),
            data: STANDARD.encode(data),
        }
    }
}

/// Client for the EventDripper API
#[derive(Debug, Clone)]
pub struct EventDripperClient {
    config: ClientConfig,
    http_client: Client,
    event_url: Url,
}

impl EventDripperClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let event_url = Url::parse(&format!(
            "{}/api/event",
            config.host.trim_end_matches('/')
        ))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            config,
            http_client,
            event_url,
        })
    }

    /// Submit an event for an entity.
    ///
    /// Any non-success status from the service is returned as
    /// [`ClientError::Status`].
    pub async fn add_event(&self, entity_id: &str, event_name: &str, data: &[u8]) -> Result<()> {
        self.send(&AddEventRequest::new(entity_id, event_name, data))
            .await
    }

    /// Submit a prepared request
    pub async fn send(&self, request: &AddEventRequest) -> Result<()> {
        debug!(
            url = %self.event_url,
            entity_id = %request.entity_id,
            event_name = %request.event_name,
            "Submitting event"
        );

        let response = self
            .http_client
            .post(self.event_url.clone())
            .header("Authorization", &self.config.api_key)
            .json(request)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Event submission failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(error = %e, "Failed to read rejected response body");
                String::new()
            });
            warn!(status = status.as_u16(), "Event submission rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// URL events are posted to
    pub fn event_url(&self) -> &Url {
        &self.event_url
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
