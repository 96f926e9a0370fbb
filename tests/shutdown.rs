//! Lifecycle and graceful-shutdown integration tests.

mod common;

use std::net::TcpListener;
use std::time::Duration;

use axum::{routing::get, Router};
use common::{spawn_router, spawn_service, test_config};
use reqwest::StatusCode;
use service_one::http::{bind, ServerError};
use tokio::time::sleep;

#[tokio::test(flavor = "multi_thread")]
async fn clean_shutdown_after_signal() {
    let server = spawn_service(test_config());
    let base_url = server.base_url.clone();

    // Serve one request while running
    let res = reqwest::get(format!("{base_url}/health"))
        .await
        .expect("request failed");
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown().await.expect("clean shutdown");

    // New connections are refused once the listener is gone
    let refused = reqwest::get(format!("{base_url}/health")).await;
    assert!(refused.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn in_flight_request_completes_within_drain_window() {
    let app = Router::new().route(
        "/slow",
        get(|| async {
            sleep(Duration::from_millis(200)).await;
            "done"
        }),
    );
    let server = spawn_router(app, Duration::from_secs(5));
    let url = server.url("/slow");

    let request = tokio::spawn(async move { reqwest::get(url).await });

    // Let the request reach the handler before signalling shutdown
    sleep(Duration::from_millis(50)).await;
    let result = server.shutdown().await;

    assert!(result.is_ok(), "{result:?}");
    let res = request
        .await
        .expect("request task panicked")
        .expect("in-flight request failed");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "done");
}

#[tokio::test(flavor = "multi_thread")]
async fn drain_timeout_forces_shutdown() {
    let app = Router::new().route(
        "/slow",
        get(|| async {
            sleep(Duration::from_secs(10)).await;
            "done"
        }),
    );
    let server = spawn_router(app, Duration::from_millis(200));
    let url = server.url("/slow");

    let request = tokio::spawn(async move { reqwest::get(url).await });

    sleep(Duration::from_millis(50)).await;
    let result = server.shutdown().await;

    assert!(
        matches!(result, Err(ServerError::ShutdownTimeout(_))),
        "{result:?}"
    );

    // The abandoned request fails once the connection is torn down
    let abandoned = request.await.expect("request task panicked");
    assert!(abandoned.is_err());
}

#[test]
fn bind_failure_is_fatal() {
    let occupied = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = occupied.local_addr().expect("local addr");

    let result = bind(addr);
    assert!(matches!(result, Err(ServerError::Bind(_))), "{result:?}");
}
