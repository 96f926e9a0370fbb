//! Per-request error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Per-request error. Every variant terminates only the request that
/// produced it; the server keeps serving other requests.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
