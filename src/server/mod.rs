//! HTTP API boundary.
//!
//! Provides three endpoints:
//! - `POST /audit` - run an audit and return the report or a structured error
//! - `GET /status` - JSON counters of audit outcomes
//! - `GET /health` - liveness probe
//!
//! On failure the audit endpoint answers with the taxonomy's HTTP status
//! mapping and a `{error, errorType, details, success:false}` body, so a
//! caller always receives exactly one of report or structured error.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use handlers::{audit_handler, health_handler, status_handler};
pub use types::ServerState;

/// Creates and starts the API server.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
pub async fn serve(port: u16, state: ServerState) -> Result<(), anyhow::Error> {
    let app = Router::new()
        .route("/audit", post(audit_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("API server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Audit:  POST http://127.0.0.1:{}/audit", port);
    log::info!("  - Status: GET  http://127.0.0.1:{}/status", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
