//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `ALEMBIC_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONTEXT_SIZE, DEFAULT_HOT_CAPACITY, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SEED,
};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `ALEMBIC_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `3000`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// SQLite database holding accepted combinations. Default: `./cache.db`.
    pub db_path: PathBuf,

    /// Model identifier passed to `genai`. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Model context window, also used as the generation budget. Default: `4096`.
    pub context_size: u32,

    /// Seed for every generation. Default: `0`.
    pub seed: u64,

    /// Max entries in the in-memory hot tier. Default: `10_000`.
    pub hot_capacity: u64,

    /// Whole-request timeout. Default: `60s`.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
            db_path: PathBuf::from("./cache.db"),
            model: DEFAULT_MODEL.to_string(),
            context_size: DEFAULT_CONTEXT_SIZE,
            seed: DEFAULT_SEED,
            hot_capacity: DEFAULT_HOT_CAPACITY,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "ALEMBIC_PORT";
    const ENV_BIND_ADDR: &'static str = "ALEMBIC_BIND_ADDR";
    const ENV_DB_PATH: &'static str = "ALEMBIC_DB_PATH";
    const ENV_MODEL: &'static str = "ALEMBIC_MODEL";
    const ENV_CONTEXT_SIZE: &'static str = "ALEMBIC_CONTEXT_SIZE";
    const ENV_SEED: &'static str = "ALEMBIC_SEED";
    const ENV_HOT_CAPACITY: &'static str = "ALEMBIC_HOT_CAPACITY";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "ALEMBIC_REQUEST_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let db_path = Self::parse_path_from_env(Self::ENV_DB_PATH, defaults.db_path);
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let context_size =
            Self::parse_number_from_env(Self::ENV_CONTEXT_SIZE, defaults.context_size)?;
        let seed = Self::parse_number_from_env(Self::ENV_SEED, defaults.seed)?;
        let hot_capacity =
            Self::parse_number_from_env(Self::ENV_HOT_CAPACITY, defaults.hot_capacity)?;
        let timeout_secs = Self::parse_number_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout.as_secs(),
        )?;

        Ok(Self {
            port,
            bind_addr,
            db_path,
            model,
            context_size,
            seed,
            hot_capacity,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Validates basic invariants (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.db_path.clone(),
            });
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if self.context_size == 0 {
            return Err(ConfigError::MustBePositive {
                name: "context_size",
            });
        }

        if self.hot_capacity == 0 {
            return Err(ConfigError::MustBePositive {
                name: "hot_capacity",
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::MustBePositive {
                name: "request_timeout",
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        SocketAddr::new(self.bind_addr, self.port).to_string()
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }
}
