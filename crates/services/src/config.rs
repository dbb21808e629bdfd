use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_GENERATOR_URL: &str = "https://genmodel.onrender.com";
pub const DEFAULT_CLASSROOM_URL: &str = "https://classroom.googleapis.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Endpoints and limits for the external HTTP services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub generator_url: String,
    /// Accounts backend; sign-in/sign-up are disabled when unset.
    pub api_base_url: Option<String>,
    pub classroom_url: String,
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            generator_url: DEFAULT_GENERATOR_URL.into(),
            api_base_url: None,
            classroom_url: DEFAULT_CLASSROOM_URL.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Read `QUIZ_GENERATOR_URL`, `QUIZ_API_BASE_URL`, `QUIZ_CLASSROOM_URL` and
    /// `QUIZ_HTTP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let generator_url = read("QUIZ_GENERATOR_URL")
            .map(|value| parse_base_url("QUIZ_GENERATOR_URL", &value))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_GENERATOR_URL.into());
        let api_base_url = read("QUIZ_API_BASE_URL")
            .map(|value| parse_base_url("QUIZ_API_BASE_URL", &value))
            .transpose()?;
        let classroom_url = read("QUIZ_CLASSROOM_URL")
            .map(|value| parse_base_url("QUIZ_CLASSROOM_URL", &value))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_CLASSROOM_URL.into());
        let timeout_secs = match read("QUIZ_HTTP_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidNumber {
                    key: "QUIZ_HTTP_TIMEOUT_SECS",
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            generator_url,
            api_base_url,
            classroom_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_base_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(trimmed.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl {
            key,
            value: value.to_string(),
        }),
    }
}
