//! Prediction Gateway - validates feature vectors and proxies them
//! to the remote ML prediction service.

use anyhow::Result;
use gateway_lib::HttpPredictor;
use prediction_gateway::{api, config::GatewayConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting prediction-gateway");

    // Load configuration
    let config = GatewayConfig::load()?;
    info!(ml_url = %config.ml_url, "Gateway configured");

    // Build the upstream client once; requests share it
    let predictor = Arc::new(HttpPredictor::new(
        &config.ml_url,
        config.upstream_timeout(),
    )?);
    let app_state = Arc::new(api::AppState::new(predictor));

    // Start the API server
    tokio::spawn(api::serve(config.listen_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}
