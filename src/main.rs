//! Service 1: a demonstration cloud HTTP service.
//!
//! This is the application entry point. It initializes tracing, resolves
//! the startup configuration (hostname and service version), sets up the
//! Axum router, and runs the HTTP server until a termination signal
//! arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_one::config::{ServiceConfig, DEFAULT_LOG_FILTER, DEFAULT_PORT};
use service_one::http::start_server;
use service_one::routes::create_router;
use service_one::state::AppState;

/// Service 1: demonstration cloud HTTP service
#[derive(Parser, Debug)]
#[command(name = "service-one", version, about)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "service_one=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::resolve(args.port);
    tracing::info!(
        hostname = %config.hostname,
        version = %config.service_version,
        port = config.port,
        "Service 1 starting up"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
