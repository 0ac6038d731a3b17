//! DART financial ratio API server.
//!
//! Loads `.env`, reads `DART_API_KEY` and the server settings from the environment,
//! and serves `/`, `/ratios` and `/compare`.

use std::sync::Arc;

use dartkit::server::{AppState, app};
use dartkit::{Dart, DartConfig, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dartkit=info,dart_server=info,tower_http=debug".into()),
        )
        .init();

    let dart_config = DartConfig::from_env()?;
    let server_config = ServerConfig::from_env();
    info!(
        base_url = %dart_config.base_url,
        timeout = ?dart_config.timeout,
        "DART client configured"
    );

    let dart = Dart::with_config(dart_config)?;
    let router = app(AppState::new(Arc::new(dart)), &server_config);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {} (dartkit {})", address, dartkit::VERSION);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
