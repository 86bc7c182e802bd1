use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::Config, models::health::DispatchStats};

pub struct AppState {
    stats: Arc<DispatchStats>,
    started_at: DateTime<Utc>,
}

pub async fn run_api_server(config: Config, stats: Arc<DispatchStats>) -> Result<(), Error> {
    let state = Arc::new(AppState {
        stats,
        started_at: Utc::now(),
    });

    let app = Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Health check server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = state.stats.report(state.started_at);

    (StatusCode::OK, Json(report))
}
