//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL '{0}' (expected an http:// or https:// URL)")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub timeouts: ProxyTimeouts,
    /// Largest request body forwarded to the backend.
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 120
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PROXY_MAX_BODY_BYTES`: default 16 MiB
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT);
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeouts = ProxyTimeouts {
            request_secs: env_parse("PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_PROXY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };

        let max_body_bytes = env_parse("PROXY_MAX_BODY_BYTES", DEFAULT_PROXY_MAX_BODY_BYTES);

        Ok(Self { port, backend_url, timeouts, max_body_bytes })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_BACKEND_URL).trim().trim_end_matches('/');
    let has_host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::InvalidBackendUrl(url.to_owned()));
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
