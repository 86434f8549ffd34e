//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Reduction itself is stateless; handlers only need the configured limits.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
