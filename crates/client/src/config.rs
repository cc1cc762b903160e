//! Client configuration from the environment.

use std::time::Duration;

use storefront_observability::LogFormat;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
pub const HTTP_TIMEOUT_VAR: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

pub const DEFAULT_API_URL: &str = "http://localhost:30038";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin, without the `/api` suffix.
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            log_format: LogFormat::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank variables fall
    /// back to their defaults; malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(API_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    var: API_URL_VAR,
                    reason: format!("expected an http(s) URL, got {url:?}"),
                });
            }
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = get(HTTP_TIMEOUT_VAR) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: HTTP_TIMEOUT_VAR,
                    reason: format!("expected a positive number of seconds, got {raw:?}"),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(LOG_FORMAT_VAR) {
            config.log_format = LogFormat::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                reason: format!("expected json or pretty, got {raw:?}"),
            })?;
        }

        Ok(config)
    }

    /// Base of every REST endpoint (`{api_url}/api`).
    pub fn api_base(&self) -> String {
        format!("{}/api", self.api_url.trim_end_matches('/'))
    }
}
