//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// A variable is set but does not parse.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend REST API root, without a trailing slash.
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub backend_connect_timeout: Duration,
    /// Largest request body forwarded to the backend.
    pub max_upload_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    /// - `MAX_UPLOAD_BYTES`: default 20 MiB
    ///
    /// # Errors
    ///
    /// `ConfigError` when `BACKEND_URL` is missing or a number does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("BACKEND_URL"))?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url });
        }

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            backend_url,
            backend_timeout: Duration::from_secs(parse_or(&lookup, "BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS)?),
            backend_connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BACKEND_CONNECT_TIMEOUT_SECS",
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
