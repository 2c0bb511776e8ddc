//! Runtime configuration read from the Lambda environment.

use std::time::Duration;
use thiserror::Error;

pub const FALLBACK_REGION_VAR: &str = "RELAY_FALLBACK_REGION";
pub const REQUEST_TIMEOUT_VAR: &str = "RELAY_REQUEST_TIMEOUT_SECS";

const DEFAULT_FALLBACK_REGION: &str = "us-east-1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Region logged when the function ARN cannot be parsed.
    pub fallback_region: String,
    /// Total timeout for the outbound call; `None` keeps the client default.
    pub request_timeout: Option<Duration>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            fallback_region: DEFAULT_FALLBACK_REGION.to_string(),
            request_timeout: None,
        }
    }
}

impl RelayConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeout` if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeout` if the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let fallback_region =
            read(FALLBACK_REGION_VAR).unwrap_or_else(|| DEFAULT_FALLBACK_REGION.to_string());

        let request_timeout = read(REQUEST_TIMEOUT_VAR)
            .map(|value| match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout {
                    name: REQUEST_TIMEOUT_VAR,
                    value,
                }),
            })
            .transpose()?;

        Ok(Self {
            fallback_region,
            request_timeout,
        })
    }
}
