//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state, cloneable across handlers via the
/// Arc-wrapped configuration.
///
/// The configuration is read-only after startup, so handlers access it
/// concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
