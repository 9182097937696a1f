use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;

/// The environment the process runs in. Controls error verbosity and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

/// The root configuration structure for the entire application.
///
/// Constructed once at process start and passed by reference into every
/// component that needs it. Never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Human-readable service name, echoed by the health endpoint.
    pub app_name: String,
    /// Service version string, echoed by the root banner.
    pub app_version: String,
    /// Deployment environment tag.
    pub environment: Environment,
    /// The network interface the server binds to.
    pub host: String,
    /// The TCP port the server listens on.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Connection string for the storage backend.
    pub database_url: String,
}

impl Settings {
    /// Whether error responses may carry raw error text.
    ///
    /// This is the single switch governing error verbosity: production gets a
    /// fixed generic message, everything else gets the real cause.
    pub fn verbose_errors(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Resolves the configured host/port pair into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ConfigError::ValidationError(format!(
                    "invalid bind address {}:{}",
                    self.host, self.port
                ))
            })
    }
}
