//! Notification types and payload decoding

use crate::PayloadError;
use crate::rfc3339::parse_datetime;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single event carried by a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    at: DateTime<Utc>,
    name: String,
    data: Vec<u8>,
}

impl Event {
    /// When the event occurred
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decoded event data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A verified webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    trigger_name: String,
    entity_id: String,
    events: Vec<Event>,
}

impl Notification {
    /// Decode a notification from its JSON payload.
    ///
    /// This does not check any signature; use
    /// [`construct_notification`](crate::construct_notification) for
    /// untrusted input.
    pub fn from_payload(payload: &str) -> Result<Self, PayloadError> {
        let raw: RawNotification = serde_json::from_str(payload)?;

        let events = raw
            .events
            .into_iter()
            .enumerate()
            .map(|(index, event)| event.decode(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            trigger_name: raw.trigger_name,
            entity_id: raw.entity_id,
            events,
        })
    }

    /// Name of the trigger that fired
    pub fn trigger_name(&self) -> &str {
        &self.trigger_name
    }

    /// Entity the events belong to
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Events in dispatch order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the notification, returning its events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[derive(Deserialize)]
struct RawNotification {
    trigger_name: String,
    entity_id: String,
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct RawEvent {
    at: String,
    name: String,
    data: String,
}

impl RawEvent {
    fn decode(self, index: usize) -> Result<Event, PayloadError> {
        let at = parse_datetime(&self.at)
            .map_err(|source| PayloadError::Timestamp { index, source })?;
        let data = STANDARD
            .decode(self.data.as_bytes())
            .map_err(|source| PayloadError::Base64 { index, source })?;

        Ok(Event {
            at,
            name: self.name,
            data,
        })
    }
}
