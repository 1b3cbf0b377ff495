use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Startup settings. `PASSWORD_SALT` is deliberately absent, the registration
/// workflow reads it per request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            var("DATABASE_URL").unwrap_or_else(|| "sqlite://users.db?mode=rwc".into());
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 10)?;
        let host = var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = var("APP_PORT").unwrap_or_else(|| "8080".into());

        let addr_str = format!("{host}:{port}");
        let addr = addr_str.parse().map_err(|_| ConfigError::Invalid {
            key: "APP_HOST/APP_PORT",
            value: addr_str.clone(),
        })?;

        Ok(Self {
            database_url,
            max_connections,
            addr,
        })
    }
}

fn var(key: &str) -> Option<String> {
    dotenvy::var(key).ok()
}

fn parse_var(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match var(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
