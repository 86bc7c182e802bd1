use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Display slot for local notifications. A fixed id makes each new
    /// notification replace the previous one rather than stack.
    #[serde(default = "default_display_notification_id")]
    pub display_notification_id: u32,

    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_display_notification_id() -> u32 {
    200
}

fn default_event_channel_capacity() -> usize {
    64
}

fn default_server_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_notification_id: default_display_notification_id(),
            event_channel_capacity: default_event_channel_capacity(),
            server_port: default_server_port(),
        }
    }
}
