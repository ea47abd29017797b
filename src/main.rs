// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::api_client::ApiClient;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::reqwest_transport::ReqwestTransport;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Server-side transport and API client
    let state = Arc::new(AppState {
        api_client: ApiClient::new(config.api_base_url.clone()),
        transport: Arc::new(ReqwestTransport::default()),
    });

    let router = build_router(state);

    tracing::info!(
        "Starting hiring dashboard frontend on {} (API at {})",
        config.bind_addr,
        config.api_base_url
    );

    axum::serve(tokio::net::TcpListener::bind(config.bind_addr).await?, router).await?;

    Ok(())
}
