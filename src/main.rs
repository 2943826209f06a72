mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::build_app_state;
use crate::config::InfluxSettings;
use crate::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = InfluxSettings::from_env();
    if settings.token.is_empty() {
        warn!("INFLUXDB_TOKEN is empty; queries will only succeed against an unsecured instance");
    }
    info!(url = %settings.url, org = %settings.org, "Connecting to InfluxDB");

    let state = build_app_state(settings)?;
    let app = app_router().with_state(state);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received, stopping server");
}
