//! Configuration loading and constants.
//!
//! Configuration comes from three layers, lowest priority first: built-in
//! defaults, an optional TOML file, and the `PORT` environment variable.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::env::VarError;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting payload never changes for a given build
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_GREETING: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_GREETING_MAX_AGE);

/// Health checks must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Response Payload Constants
// =============================================================================

pub const GREETING_MESSAGE: &str = "Hello from Python App!";
pub const GREETING_STATUS: &str = "running";
pub const GREETING_VERSION: &str = "1.0.0";

pub const HEALTH_STATUS: &str = "healthy";
pub const SERVICE_NAME: &str = "python-app";

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable that overrides `http.port`
pub const PORT_ENV_VAR: &str = "PORT";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to drain in-flight connections after SIGTERM/SIGINT
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Default log filter when neither --log-level nor RUST_LOG is set.
/// Verbose on purpose: this service exists to debug deployments.
pub const DEFAULT_LOG_FILTER: &str = "sample_app=debug,tower_http=debug";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Socket address to bind. The host must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "http.host must be an IP address, got '{}'",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply `PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let port_var = match std::env::var(PORT_ENV_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidPort {
                    value: raw.to_string_lossy().into_owned(),
                })
            }
        };
        Self::load_with_port(path, port_var.as_deref())
    }

    /// Same as [`AppConfig::load`], with the `PORT` value passed in.
    pub fn load_with_port(path: Option<&Path>, port: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.apply_port_override(port)?;

        // Fail at startup rather than at bind time
        config.http.socket_addr()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace `http.port` with the value of `PORT`, if it was set.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(value) = value {
            self.http.port = parse_port(value)?;
        }
        Ok(())
    }
}

/// Parse a TCP port from a decimal string, ignoring surrounding whitespace.
pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort {
            value: value.to_string(),
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid PORT value '{value}': expected an integer between 0 and 65535")]
    InvalidPort { value: String },
    #[error("Configuration error: {0}")]
    Validation(String),
}
