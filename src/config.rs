use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "foodtracker=debug,axum=info,tower_http=info";

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = parse_or("APP_PORT", lookup("APP_PORT"), defaults.port)?;
        let max_body_bytes =
            parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), defaults.max_body_bytes)?;
        let log = LogConfig {
            filter: lookup("RUST_LOG").unwrap_or(defaults.log.filter),
            json: lookup("LOG_FORMAT")
                .map(|v| v == "json")
                .unwrap_or(defaults.log.json),
        };
        Ok(Self {
            host,
            port,
            max_body_bytes,
            log,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "APP_HOST",
            value: self.host.clone(),
        })
    }
}

/// The values used when no environment variable overrides them.
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log: LogConfig {
                filter: DEFAULT_LOG_FILTER.into(),
                json: false,
            },
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
