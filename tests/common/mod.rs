#![allow(dead_code)]
//! Shared helpers for integration tests.
//!
//! Each test binds the real server on an ephemeral port and drives it
//! over HTTP; shutdown is triggered through the injected signal future
//! instead of a process signal.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use service_one::config::ServiceConfig;
use service_one::http::{serve, ServerError};
use service_one::routes::create_router;
use service_one::state::AppState;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Drain window for tests that expect a clean shutdown.
pub const TEST_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Trigger shutdown and wait for the server to finish.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.task.await.expect("server task panicked")
    }
}

/// Fixed configuration with recognizable hostname and version values.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        port: 0,
        hostname: "test-host".to_string(),
        service_version: "v9.9.9".to_string(),
    }
}

/// Start the full service router on an ephemeral port.
pub fn spawn_service(config: ServiceConfig) -> TestServer {
    spawn_router(create_router(AppState::new(config)), TEST_DRAIN_TIMEOUT)
}

/// Start an arbitrary router on an ephemeral port with the given drain window.
pub fn spawn_router(app: Router, drain_timeout: Duration) -> TestServer {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind ephemeral port");
    listener.set_nonblocking(true).expect("set nonblocking");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    let (tx, rx) = oneshot::channel::<()>();
    let task = tokio::spawn(serve(
        app,
        listener,
        async move {
            let _ = rx.await;
        },
        drain_timeout,
    ));

    TestServer {
        base_url: format!("http://{addr}"),
        shutdown: Some(tx),
        task,
    }
}
