use std::env;
use std::fmt;
use std::time::Duration;

use crate::errors::ApiClientError;

pub const DEFAULT_BASE_URL: &str = "https://api.forecastapp.com";

const ENV_URL: &str = "FORECAST_URL";
const ENV_ACCOUNT_ID: &str = "FORECAST_ACCOUNT_ID";
const ENV_ACCESS_TOKEN: &str = "FORECAST_ACCESS_TOKEN";
const ENV_TIMEOUT_SECS: &str = "FORECAST_TIMEOUT_SECS";

/// Connection settings for a [`ForecastClient`](crate::ForecastClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub account_id: String,
    access_token: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// A zero `timeout` is treated the same as no timeout.
    pub fn new(
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            account_id: account_id.into(),
            access_token: access_token.into(),
            timeout: timeout.filter(|t| !t.is_zero()),
        }
    }

    /// Reads `FORECAST_ACCOUNT_ID` and `FORECAST_ACCESS_TOKEN` (required),
    /// `FORECAST_URL` and `FORECAST_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ApiClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ApiClientError::Config(format!("{} is not set", key)))
        };

        let base_url = lookup(ENV_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let account_id = required(ENV_ACCOUNT_ID)?;
        let access_token = required(ENV_ACCESS_TOKEN)?;
        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    ApiClientError::Config(format!(
                        "{} is invalid ({:?}): {}",
                        ENV_TIMEOUT_SECS, raw, e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(ClientConfig::new(base_url, account_id, access_token, timeout))
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
