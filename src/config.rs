//! Runtime settings read from the environment (and `.env`, when present).

use std::env;

pub const DEFAULT_SQLITE_PATH: &str = "database.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sqlite_path: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid PORT value {value:?}: {source}")]
pub struct ConfigError {
    value: String,
    source: std::num::ParseIntError,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError { value, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.into()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
        })
    }
}
