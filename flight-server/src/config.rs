//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "FLIGHT_SERVER_ADDR";

/// Environment variable holding the per-request flight limit.
pub const MAX_SEGMENTS_VAR: &str = "FLIGHT_SERVER_MAX_SEGMENTS";

/// Environment variable holding the log filter directive.
pub const LOG_VAR: &str = "RUST_LOG";

/// Error loading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration parameters for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_addr: SocketAddr,

    /// Maximum number of flights accepted in one request.
    /// Larger requests are rejected before reduction.
    pub max_segments: usize,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, max_segments: usize, log_filter: impl Into<String>) -> Self {
        Self {
            bind_addr,
            max_segments,
            log_filter: log_filter.into(),
        }
    }

    /// Load configuration from process environment variables.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(MAX_SEGMENTS_VAR) {
            config.max_segments = match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: MAX_SEGMENTS_VAR,
                        value,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: MAX_SEGMENTS_VAR,
                        value,
                        reason: e.to_string(),
                    });
                }
            };
        }

        if let Some(value) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_segments: 10_000,
            log_filter: "info".to_string(),
        }
    }
}
