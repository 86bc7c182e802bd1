use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use push_router::{
    api::run_api_server,
    clients::{
        account::AccountClient, display::AnnouncingDisplay, navigation::LoggingNavigator,
        transport::ChannelTransport,
    },
    config::Config,
    models::health::DispatchStats,
    utils::{Collaborators, run_dispatcher},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;

    let mut transport = ChannelTransport::new(config.event_channel_capacity);
    info!(token = %transport.request_token(), "registered with push transport");

    let events = transport
        .take_events()
        .ok_or_else(|| anyhow!("event stream already taken"))?;

    let collaborators = Collaborators {
        display: Arc::new(AnnouncingDisplay),
        navigator: Arc::new(LoggingNavigator),
        account: Arc::new(AccountClient::new()),
    };

    let stats = Arc::new(DispatchStats::default());
    let api = tokio::spawn(run_api_server(config.clone(), Arc::clone(&stats)));

    // Runs until the transport and every producer handle are dropped.
    run_dispatcher(events, collaborators, config, stats).await;

    api.abort();
    Ok(())
}
