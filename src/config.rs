//! Startup configuration and service constants.
//!
//! The service is configured entirely at startup: a listen port from the
//! CLI, the OS hostname, and a version string from the process
//! environment. Everything is resolved once before serving begins and is
//! never re-resolved per request.

use std::ffi::OsString;
use std::time::Duration;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8001;

/// Environment variable holding the deployed service version.
pub const SERVICE_VERSION_ENV: &str = "SERVICE_VERSION";

/// Version reported when `SERVICE_VERSION` is unset or empty.
pub const FALLBACK_VERSION: &str = "v1.0.0";

/// Hostname reported when OS resolution fails.
pub const FALLBACK_HOSTNAME: &str = "unknown";

/// How long shutdown waits for in-flight requests before forcing exit.
pub const SHUTDOWN_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "service_one=debug,axum=info";

/// Process-wide service configuration.
///
/// Resolved once at startup and never mutated afterwards, so handlers
/// read it concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP listen port
    pub port: u16,
    /// OS hostname, or `"unknown"` if unresolvable
    pub hostname: String,
    /// Deployed version from `SERVICE_VERSION`, or `"v1.0.0"`
    pub service_version: String,
}

impl ServiceConfig {
    /// Resolve configuration from the OS and process environment.
    pub fn resolve(port: u16) -> Self {
        let hostname = hostname_or_fallback(hostname::get().ok());
        let service_version = version_or_fallback(std::env::var(SERVICE_VERSION_ENV).ok());
        Self {
            port,
            hostname,
            service_version,
        }
    }
}

/// Convert a raw OS hostname into a display string, falling back to
/// `"unknown"` when resolution failed or the name is not valid UTF-8.
fn hostname_or_fallback(raw: Option<OsString>) -> String {
    raw.and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string())
}

/// Pick the configured version, falling back when unset or empty.
fn version_or_fallback(raw: Option<String>) -> String {
    match raw {
        Some(v) if !v.is_empty() => v,
        _ => FALLBACK_VERSION.to_string(),
    }
}
