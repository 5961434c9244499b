//! `api` crate — HTTP layer.
//!
//! Exposes:
//!   GET /users   — every row of the configured table as a JSON array
//!   GET /health  — liveness probe, never touches the database

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use db::DbConfig;

pub use error::ApiError;

/// State shared by every handler.  Read-only; each request opens its own
/// database connection from it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<DbConfig>,
}

impl AppState {
    pub fn new(config: DbConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

/// Build the router with all routes and middleware attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(handlers::users::list))
        .route("/health", get(handlers::health::check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(bind: &str, config: DbConfig) -> Result<(), ApiError> {
    info!(
        database = %config.redacted_url(),
        table = config.table(),
        "Starting API server"
    );

    let app = router(AppState::new(config));
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
