use anyhow::{Error, Result};
use tracing::info;

/// Renders a visible notification carrying the payload string that comes
/// back on tap. Reusing the same `id` replaces the previous notification
/// instead of stacking a new one.
pub trait LocalDisplay: Send + Sync {
    fn show(&self, id: u32, title: &str, body: &str, payload: &str) -> Result<(), Error>;
}

/// Display backend that announces notifications on the structured log.
pub struct AnnouncingDisplay;

impl LocalDisplay for AnnouncingDisplay {
    fn show(&self, id: u32, title: &str, body: &str, payload: &str) -> Result<(), Error> {
        info!(notification_id = id, title, body, payload, "showing local notification");
        Ok(())
    }
}
