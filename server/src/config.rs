//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub upstream: String,
    pub timeouts: ProxyTimeouts,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Required:
    /// - `RATIO_API_UPSTREAM`: `http(s)://` base URL of the personnel API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RATIO_PROXY_TIMEOUT_SECS`: default 30
    /// - `RATIO_PROXY_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
        };

        let upstream = lookup("RATIO_API_UPSTREAM")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing { var: "RATIO_API_UPSTREAM" })?;
        let upstream = parse_upstream(&upstream)?;

        let timeouts = ProxyTimeouts {
            request_secs: parse_u64_or(&lookup, "RATIO_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            connect_secs: parse_u64_or(&lookup, "RATIO_PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream, timeouts })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "RATIO_API_UPSTREAM",
            value: raw.to_owned(),
            reason: "expected an http:// or https:// URL",
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_u64_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
