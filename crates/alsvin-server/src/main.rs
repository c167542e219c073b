//! Alsvin server binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alsvin_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alsvin_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration, with environment overrides
    let mut config = ServerConfig::default();
    if let Ok(bind) = std::env::var("ALSVIN_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid ALSVIN_BIND address '{bind}': {e}"))?;
    }
    if let Ok(origin) = std::env::var("ALSVIN_ALLOWED_ORIGIN") {
        config.allowed_origin = origin
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid ALSVIN_ALLOWED_ORIGIN '{origin}': {e}"))?;
    }
    if let Ok(max) = std::env::var("ALSVIN_MAX_QUBITS") {
        config.max_qubits = max
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid ALSVIN_MAX_QUBITS '{max}': {e}"))?;
    }
    let bind_addr = config.bind_address;

    // Create application state
    let state = Arc::new(AppState::with_config(config));

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting Alsvin simulator at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
