use anyhow::{anyhow, Result};
use common::config::AppConfig;
use common::telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig};
use std::net::SocketAddr;

mod handlers;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    init_telemetry(TelemetryConfig::from_app_config("product-service", &config))
        .map_err(|e| anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Starting Product Service...");
    tracing::info!("Distributed tracing: {}", if config.enable_jaeger { "enabled" } else { "disabled" });

    tracing::info!("Configuration:");
    tracing::info!("  Cache backend: {:?}", config.cache.backend);
    tracing::info!("  Cache TTL: {} seconds", config.cache.ttl_seconds);
    tracing::info!("  Run migrations: {}", config.database.run_migrations);
    tracing::info!("  Port: {}", config.port);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Product service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    // Shutdown telemetry gracefully
    shutdown_telemetry();

    Ok(())
}
