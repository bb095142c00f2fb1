use axum_helpers::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, load_dotenv};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let dotenv_file = load_dotenv();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    match dotenv_file {
        Some(path) => info!("Loaded environment from {}", path),
        None => info!("No .env file found, using process environment"),
    }
    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set; admin routes will answer 500");
    }

    let state = AppState::connect(config).await?;
    let app = api::app(&state)?;

    info!(
        "Starting Workshop API (drain timeout {:?})",
        state.config.server.shutdown_timeout
    );

    let server = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();

    create_production_app(app, &server, async move {
        if let Some(client) = mongo_client {
            info!("Shutting down: closing MongoDB connections");
            drop(client);
            info!("MongoDB connection closed successfully");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Workshop API shutdown complete");
    Ok(())
}
