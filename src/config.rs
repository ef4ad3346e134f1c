//! Runtime configuration for the task feed.
//!
//! Settings come from the environment:
//!
//! - `TASKFEED_API_URL` (required): base URL of the task service
//! - `TASKFEED_RADIUS_KM`: feed radius, default 30
//! - `TASKFEED_TIMEOUT_SECS`: HTTP request timeout, default 10
//! - `TASKFEED_CREDENTIALS_DIR`: directory holding the stored token

use crate::feed::domain::FeedRadius;
use camino::{Utf8Path, Utf8PathBuf};
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Environment variable for the task service base URL.
pub const ENV_API_URL: &str = "TASKFEED_API_URL";
/// Environment variable for the feed radius in kilometres.
pub const ENV_RADIUS_KM: &str = "TASKFEED_RADIUS_KM";
/// Environment variable for the HTTP timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TASKFEED_TIMEOUT_SECS";
/// Environment variable for the credential directory.
pub const ENV_CREDENTIALS_DIR: &str = "TASKFEED_CREDENTIALS_DIR";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set or is blank.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Feed settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    api_url: String,
    radius: FeedRadius,
    request_timeout: Duration,
    credentials_dir: Option<Utf8PathBuf>,
}

/// Accepts absolute `http`/`https` URLs that name a host.
fn check_api_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|err| err.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("expected a host".to_owned());
    }
    Ok(())
}

impl FeedConfig {
    /// Creates a configuration with defaults for everything but the API URL.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            radius: FeedRadius::default(),
            request_timeout: DEFAULT_TIMEOUT,
            credentials_dir: None,
        }
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API URL is missing or a value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API URL is missing or a value fails
    /// to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let api_url = read(ENV_API_URL).ok_or(ConfigError::Missing(ENV_API_URL))?;
        if let Err(reason) = check_api_url(&api_url) {
            return Err(ConfigError::Invalid {
                key: ENV_API_URL,
                value: api_url,
                reason,
            });
        }
        let mut config = Self::new(api_url);

        if let Some(raw) = read(ENV_RADIUS_KM) {
            let radius = raw
                .parse::<f64>()
                .map_err(|err| err.to_string())
                .and_then(|km| FeedRadius::new(km).map_err(|err| err.to_string()))
                .map_err(|reason| ConfigError::Invalid {
                    key: ENV_RADIUS_KM,
                    value: raw.clone(),
                    reason,
                })?;
            config = config.with_radius(radius);
        }

        if let Some(raw) = read(ENV_TIMEOUT_SECS) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: "expected a positive number of seconds".to_owned(),
                })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        if let Some(dir) = read(ENV_CREDENTIALS_DIR) {
            config = config.with_credentials_dir(dir);
        }

        Ok(config)
    }

    /// Sets the feed radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: FeedRadius) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the credential directory.
    #[must_use]
    pub fn with_credentials_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.credentials_dir = Some(dir.into());
        self
    }

    /// Returns the task service base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the feed radius.
    #[must_use]
    pub const fn radius(&self) -> FeedRadius {
        self.radius
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the credential directory, if configured.
    #[must_use]
    pub fn credentials_dir(&self) -> Option<&Utf8Path> {
        self.credentials_dir.as_deref()
    }
}
