use std::{env, net::SocketAddr};

use thiserror::Error;
use tracing::info;

pub const DEFAULT_DATABASE: &str = "portfolio";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidVar {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongodb_uri = var("MONGODB_URI").ok_or(ConfigError::MissingVar("MONGODB_URI"))?;

        let database_name = var("MONGODB_DB").unwrap_or_else(|| {
            info!("MONGODB_DB not set, using default: {DEFAULT_DATABASE}");
            DEFAULT_DATABASE.to_string()
        });

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidVar {
                key: "BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            mongodb_uri,
            database_name,
            bind_addr,
        })
    }
}
