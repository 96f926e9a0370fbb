//! Deployment info endpoint for cloud and Docker debugging.

use axum::{extract::State, response::Response};
use serde::Serialize;

use super::json_response;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
struct InfoResponse<'a> {
    hostname: &'a str,
    service_version: &'a str,
    message: &'static str,
}

/// Reports the hostname and version resolved at startup.
///
/// Both values are cached process-wide and never re-resolved, so
/// repeated calls return byte-identical payloads.
pub async fn info(State(state): State<AppState>) -> Result<Response, AppError> {
    json_response(&InfoResponse {
        hostname: &state.config.hostname,
        service_version: &state.config.service_version,
        message: "Cloud & Docker info for debugging",
    })
}
