//! HTTP server lifecycle: binding, serving, and graceful shutdown.
//!
//! The server moves through four states: bind the listener (fatal on
//! failure), serve until a termination signal arrives, drain in-flight
//! requests bounded by a timeout, then stop. A drain that outlasts the
//! timeout is reported as an error and the process exits non-zero.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
