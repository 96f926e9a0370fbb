//! Service 1: a demonstration cloud HTTP service.
//!
//! Exposes six fixed endpoints (an HTML welcome page plus JSON ping,
//! hello, health, info, and nginx proxy-verification endpoints), logs
//! every request, and shuts down gracefully on SIGINT/SIGTERM with a
//! bounded drain window for in-flight requests.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
