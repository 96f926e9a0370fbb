//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process
//! is running. Used by Kubernetes, ECS, systemd, and load balancers to
//! verify the service is alive.

use axum::response::Response;
use serde::Serialize;

use super::json_response;
use crate::error::AppError;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can
/// respond to HTTP.
pub async fn health() -> Result<Response, AppError> {
    json_response(&HealthResponse { status: "healthy" })
}
