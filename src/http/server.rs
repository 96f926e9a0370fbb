//! HTTP server startup and shutdown orchestration.

use std::future::Future;
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{ServiceConfig, SHUTDOWN_DRAIN_TIMEOUT};

use super::shutdown;

/// Server lifecycle error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("Shutdown timed out after {0:?} with requests still in flight")]
    ShutdownTimeout(Duration),
}

/// Start the HTTP server and block until shutdown completes.
///
/// Serves until SIGTERM/SIGINT, then drains in-flight requests within
/// the configured timeout.
pub async fn start_server(app: Router, config: &ServiceConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = bind(addr)?;
    serve(
        app,
        listener,
        shutdown::shutdown_signal(),
        SHUTDOWN_DRAIN_TIMEOUT,
    )
    .await
}

/// Bind the listen socket. Bind failure is fatal and not retried.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr).map_err(ServerError::Bind)?;
    // axum-server drives the listener from the tokio reactor
    listener.set_nonblocking(true).map_err(ServerError::Bind)?;
    Ok(listener)
}

/// Serve requests until `signal` resolves, then drain within `drain_timeout`.
///
/// Acceptance stops as soon as the signal arrives; in-flight requests get
/// the full drain window to complete. Requests still running when the
/// window closes are abandoned and the call reports
/// [`ServerError::ShutdownTimeout`].
pub async fn serve(
    app: Router,
    listener: TcpListener,
    signal: impl Future<Output = ()>,
    drain_timeout: Duration,
) -> Result<(), ServerError> {
    // The socket is already bound here; a local_addr failure is a
    // runtime I/O error, not a bind failure
    let addr = listener.local_addr().map_err(ServerError::Server)?;
    let handle = Handle::new();

    let server = axum_server::from_tcp(listener)
        .handle(handle.clone())
        .serve(app.into_make_service_with_connect_info::<SocketAddr>());
    let server_task = tokio::spawn(server);
    let abort = server_task.abort_handle();

    tracing::info!(%addr, "Listening for HTTP connections");

    signal.await;

    // Stop accepting new connections immediately; the drain window below
    // bounds how long in-flight requests may run.
    handle.graceful_shutdown(None);
    tracing::info!(timeout = ?drain_timeout, "Draining in-flight requests");

    match tokio::time::timeout(drain_timeout, server_task).await {
        Ok(Ok(Ok(()))) => {
            tracing::info!("Server exited cleanly");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(ServerError::Server(e)),
        Ok(Err(join_err)) => Err(ServerError::Server(std::io::Error::other(join_err))),
        Err(_) => {
            abort.abort();
            tracing::error!(timeout = ?drain_timeout, "Forced shutdown, drain timeout elapsed");
            Err(ServerError::ShutdownTimeout(drain_timeout))
        }
    }
}
