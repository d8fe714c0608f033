//! HTTP server for georadius
//!
//! Serves the radius query endpoints over the loaded point store.

pub mod routes;
pub mod state;

use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server on the address from the state's configuration
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.server_addr();
    run_on(&addr, state).await
}

/// Start the HTTP server with a specific address
///
/// Useful for tests or when you want to override config
pub async fn run_on(addr: &str, state: Arc<AppState>) -> Result<()> {
    let addr: SocketAddr = addr.parse().map_err(|e| {
        crate::error::Error::Server(format!("Invalid server address: {}", e))
    })?;

    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e))
    })?;

    axum::serve(listener, app).await.map_err(|e| {
        crate::error::Error::Server(format!("Server error: {}", e))
    })?;

    Ok(())
}
