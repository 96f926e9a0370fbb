//! HTTP route handlers for the demo service.
//!
//! Every endpoint accepts literal GET only: routes are registered with a
//! GET method filter (not axum's `get`, which would also serve HEAD) and
//! a fallback that turns every other verb, HEAD included, into a 405
//! with a plain-text body. JSON
//! payloads are fixed-shape structs encoded through [`json_response`],
//! which downgrades a serialization failure to a 500 instead of
//! panicking. Requests to unregistered paths fall through to axum's
//! default 404.

pub mod health;
pub mod hello;
pub mod home;
pub mod info;
pub mod ping;

use axum::{
    handler::Handler,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::middleware::request_log_layer;
use crate::state::AppState;

/// Body returned for any non-GET request on a registered path.
const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";

/// Fallback for registered paths hit with an unsupported method.
async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY).into_response()
}

/// Register a handler for literal GET only.
///
/// HEAD and every other verb fall through to the 405 fallback.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    on(MethodFilter::GET, handler).fallback(method_not_allowed)
}

/// Encode a payload as an `application/json` response.
///
/// Serialization of these fixed payloads is not expected to fail, but a
/// failure surfaces as a 500 rather than a panic.
pub(crate) fn json_response<T: Serialize>(payload: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(payload)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Creates the Axum router with all routes and request logging.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get_only(home::index))
        .route("/ping", get_only(ping::ping))
        .route("/hello", get_only(hello::hello))
        .route("/health", get_only(health::health))
        .route("/info", get_only(info::info))
        .route("/nginx-test", get_only(nginx_test::nginx_test))
        .with_state(state)
        // Request logging middleware - creates root span with request_id
        .layer(middleware::from_fn(request_log_layer))
}
