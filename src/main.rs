use anyhow::Context;
use std::sync::Arc;
use workshop_api::config::AppConfig;
use workshop_api::items::helpers::format_item_summary;
use workshop_api::router::create_app_router;
use workshop_api::state::AppState;
use workshop_api::{observability, SERVICE_DESCRIPTION, SERVICE_TITLE, SERVICE_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    tracing::info!("Starting {} v{} ({})", SERVICE_TITLE, SERVICE_VERSION, SERVICE_DESCRIPTION);

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration from environment: {e}");
        tracing::info!("Using default configuration");
        AppConfig::default()
    });

    // Initialize application state (seeds the item store)
    let state = Arc::new(AppState::from_config(&config));
    tracing::info!("Seeded items: {}", format_item_summary(&state.items.list()));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    tracing::info!("Server running on http://{}", listener.local_addr()?);
    tracing::info!("  GET  /                - Landing page");
    tracing::info!("  GET  /items           - List items");
    tracing::info!("  POST /items           - Create item");
    tracing::info!("  GET  /items/:item_id  - Get item");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
