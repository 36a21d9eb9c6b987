//! oidkit object API
//!
//! Serves ObjectId parsing and validation over HTTP.

use anyhow::Result;
use oidkit_object_api::{api, config, state::AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to OIDKIT_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting oidkit object API");
    info!(
        listen_addr = %config.listen_addr,
        required_fields = ?config.required_fields,
        optional_fields = ?config.optional_fields,
        fixed_message = config.invalid_id_message.is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Received shutdown signal");
    });

    if let Err(e) = server.await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server exited normally");
    Ok(())
}
