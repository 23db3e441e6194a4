//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::InMemoryUserStore;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize the user store with the default directory entries
    let store = Arc::new(InMemoryUserStore::seeded());
    tracing::info!("User store initialized");

    // Create application state with centralized service container
    let app_state = AppState::from_store(store);

    // Build router
    let app = create_router(app_state);

    // Start server (CLI arguments override environment configuration)
    let host = args.host.unwrap_or(config.server_host);
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
