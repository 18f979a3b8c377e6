//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address, read from `BIND_HOST`. Shells often export `HOST`
    /// as the machine name, so that variable is not consulted.
    #[serde(default = "default_host")]
    pub bind_host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins. Unset allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    // === Observability ===
    /// Log filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Expose `/metrics` and record request metrics.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: default_host(),
            port: default_port(),
            cors_allowed_origins: None,
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            metrics_enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_host.trim().parse().map_err(|_| {
            ServiceError::InvalidConfig(format!(
                "BIND_HOST is not an IP address: {:?}",
                self.bind_host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parsed CORS origins. Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>> {
        let Some(raw) = self.cors_allowed_origins.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    ServiceError::InvalidConfig(format!(
                        "CORS_ALLOWED_ORIGINS contains an invalid origin: {origin:?}"
                    ))
                })
            })
            .collect()
    }
}
