use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::models::payload::Payload;

/// Wire form of a remote push delivery: an optional display pair plus a
/// flat data map. Deliveries without display fields are data-only and
/// never shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteMessage {
    #[serde(default)]
    pub data: Payload,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Option<String>,
}

impl RemoteMessage {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Everything the transport can hand the dispatcher, normalized onto a
/// single queue. `LocalTap` carries only the raw payload string that was
/// attached to the displayed notification.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Foreground(RemoteMessage),
    Background(RemoteMessage),
    Opened(RemoteMessage),
    LocalTap(String),
}
