//! Server configuration loaded from the environment.
//!
//! `main` calls [`ServerConfig::from_env`] after `dotenvy` has populated the
//! process environment from `.env`. Empty values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Browser origins allowed to call the API when `CORS_ORIGINS` is unset.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8000",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = get("CORS_ORIGINS").map_or_else(
            || DEFAULT_CORS_ORIGINS.iter().map(|o| (*o).to_owned()).collect(),
            |raw| parse_origins(&raw),
        );

        // Like the pool size knob elsewhere, a bad value falls back to the default.
        let db_max_connections = get("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { database_url, port, cors_origins, db_max_connections })
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
pub(crate) fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect()
}
