//! Reachability ping endpoint.

use axum::response::Response;
use serde::Serialize;

use super::json_response;
use crate::error::AppError;

#[derive(Serialize)]
struct PingResponse {
    status: &'static str,
    service: &'static str,
}

/// Confirms the service is reachable and identifies which service replied.
pub async fn ping() -> Result<Response, AppError> {
    json_response(&PingResponse {
        status: "ok",
        service: "1",
    })
}
