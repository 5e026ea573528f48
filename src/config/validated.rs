//! Validated configuration for a single step run.
//!
//! All validation is performed during construction, so holding a
//! [`ValidatedConfig`] means the required inputs are present and the webhook
//! URL parses.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::env::{EnvSource, var};
use super::error::ConfigError;
use super::inputs::StepInputs;

/// Fully validated configuration ready for use by the step.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Raw inputs the configuration was built from
    pub inputs: StepInputs,

    /// Parsed webhook URL
    pub url: Url,

    /// Request deadline; `None` leaves the transport defaults in place
    pub timeout: Option<Duration>,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));

        write!(
            f,
            "Config {{ url: {}, timeout: {}, debug: {}, build_failed: {} }}",
            self.url, timeout, self.inputs.is_debug_mode, self.inputs.is_build_failed,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and step inputs.
    ///
    /// `timeout_input` is the raw `request_timeout` input, if set. A CLI
    /// `--timeout` takes precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webhook_url` or `message` is empty (checked in that order)
    /// - The webhook URL cannot be parsed
    /// - The timeout is zero or not a number
    pub fn from_raw(
        cli: &Cli,
        inputs: StepInputs,
        timeout_input: Option<&str>,
    ) -> Result<Self, ConfigError> {
        inputs.validate()?;

        let url = Self::resolve_url(&inputs.webhook_url)?;
        let timeout = Self::resolve_timeout(cli, timeout_input)?;

        Ok(Self {
            inputs,
            url,
            timeout,
        })
    }

    /// Reads the step inputs from `source` and validates them.
    ///
    /// # Errors
    ///
    /// See [`ValidatedConfig::from_raw`].
    pub fn from_source(cli: &Cli, source: &impl EnvSource) -> Result<Self, ConfigError> {
        let timeout_input = source.get(var::REQUEST_TIMEOUT);
        Self::from_raw(
            cli,
            StepInputs::from_source(source),
            timeout_input.as_deref(),
        )
    }

    fn resolve_url(raw: &str) -> Result<Url, ConfigError> {
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_timeout(
        cli: &Cli,
        timeout_input: Option<&str>,
    ) -> Result<Option<Duration>, ConfigError> {
        // Priority: CLI explicit > input > none
        let seconds = match (cli.timeout, timeout_input.map(str::trim)) {
            (Some(secs), _) => secs,
            (None, Some(raw)) if !raw.is_empty() => {
                raw.parse::<u64>()
                    .map_err(|e| ConfigError::InvalidTimeout {
                        value: raw.to_string(),
                        reason: e.to_string(),
                    })?
            }
            _ => return Ok(None),
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: seconds.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Some(Duration::from_secs(seconds)))
    }
}
