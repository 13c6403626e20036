//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DETECT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_DETECT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DETECT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid DETECT_API_URL '{0}' (expected http:// or https:// URL)")]
    InvalidBaseUrl(String),

    #[error("invalid {var}: '{value}' (expected positive integer seconds)")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where and how to reach the classification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash; `/detect` is appended per request.
    pub base_url: String,
    pub timeouts: UpstreamTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DETECT_API_URL`: default `http://localhost:8000`
    /// - `DETECT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `DETECT_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any value is present but malformed.
    /// Blank `PORT` and timeout values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let base_url = parse_base_url(lookup("DETECT_API_URL").as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_timeout_secs(
                "DETECT_REQUEST_TIMEOUT_SECS",
                lookup("DETECT_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_DETECT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_timeout_secs(
                "DETECT_CONNECT_TIMEOUT_SECS",
                lookup("DETECT_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_DETECT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, upstream: UpstreamConfig { base_url, timeouts } })
    }
}

/// Trimmed value, with blank treated the same as unset.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(DEFAULT_PORT);
    };
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map_or(DEFAULT_DETECT_API_URL, str::trim);
    let trimmed = value.trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBaseUrl(value.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout_secs(var: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(default);
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
