//! API error type and its HTTP mapping.
//!
//! Every database failure becomes the same opaque 500; the detail goes to
//! the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connecting to or querying the database failed.
    #[error("database error: {0}")]
    Database(#[from] DbError),

    /// Binding or serving the listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "internal_error",
                "message": "an internal error occurred"
            })),
        )
            .into_response()
    }
}
