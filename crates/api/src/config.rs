//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup and never changes afterwards.
//! Anything missing or malformed is reported as a [`ConfigError`] before
//! the server opens a socket.

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Invalid or missing configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Invalid configuration: {var} must be set")]
    Missing { var: &'static str },

    /// `PORT` is not an integer in 1..=65535.
    #[error("Invalid configuration: PORT must be an integer between 1 and 65535, got {value:?}")]
    InvalidPort { value: String },

    /// `DATABASE_URL` is not a PostgreSQL connection string.
    #[error("Invalid configuration: DATABASE_URL is not a valid connection string: {reason}")]
    InvalidDatabaseUrl { reason: String },
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `PORT` — listen port, required
/// - `DATABASE_URL` — PostgreSQL connection string, required
/// - `HOST` — bind address (default: `"0.0.0.0"`)
///
/// `RUST_LOG` is read by the tracing subscriber, not here.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Database settings, shared by the server and the tooling binaries.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Binaries load `.env` (via `dotenvy`) before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT"))?;
        let database = DatabaseConfig::from_lookup(&lookup)?;

        Ok(Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Loads `DATABASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing {
                var: "DATABASE_URL",
            })?;
        validate_database_url(&url)?;

        Ok(Self { url })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { var: "PORT" })?;

    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value }),
    }
}

fn validate_database_url(url: &str) -> Result<(), ConfigError> {
    if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        return Err(ConfigError::InvalidDatabaseUrl {
            reason: "expected a postgres:// or postgresql:// URL".to_string(),
        });
    }

    PgConnectOptions::from_str(url)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidDatabaseUrl {
            reason: e.to_string(),
        })
}
