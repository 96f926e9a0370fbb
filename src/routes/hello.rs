//! Hello endpoint.

use axum::response::Response;
use serde::Serialize;

use super::json_response;
use crate::error::AppError;

#[derive(Serialize)]
struct HelloResponse {
    message: &'static str,
}

/// Returns a fixed greeting identifying the service.
pub async fn hello() -> Result<Response, AppError> {
    json_response(&HelloResponse {
        message: "Hello from Service 1",
    })
}
