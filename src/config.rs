// config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOE_CATALOG_ADDR is not a socket address: `{0}`")]
    InvalidAddr(String),

    #[error("SHOE_CATALOG_WORKERS must be a positive integer, got `{0}`")]
    InvalidWorkers(String),

    #[error("SHOE_CATALOG_LOG_FORMAT must be `pretty` or `json`, got `{0}`")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    /// JSON catalog to serve. The demo catalog is used when unset.
    pub data_path: Option<PathBuf>,
    pub log: LogConfig,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("SHOE_CATALOG_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let workers = match lookup("SHOE_CATALOG_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => DEFAULT_WORKERS,
        };

        let data_path = lookup("SHOE_CATALOG_DATA")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let format = match lookup("SHOE_CATALOG_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Pretty,
        };

        let filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            addr,
            workers,
            data_path,
            log: LogConfig { filter, format },
        })
    }
}
