//! Step execution logic.
//!
//! Sequences the step: validate inputs, resolve the payload, deliver it
//! once and check the answer.

use thiserror::Error;

use fleep_notify::config::{Cli, ConfigError, EnvSource, StepInputs, ValidatedConfig};
use fleep_notify::payload::{PayloadError, build_payload};
use fleep_notify::webhook::{FleepWebhook, HttpClient, HttpError, ReqwestClient, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for a failed step run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The step inputs are incomplete or malformed.
    #[error("Issue with input: {0}")]
    Config(#[from] ConfigError),

    /// The payload could not be serialized.
    #[error("Failed to create JSON payload: {0}")]
    Payload(#[from] PayloadError),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The webhook request failed or was rejected.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

/// Runs the step with the production HTTP client.
///
/// All inputs, including `request_timeout`, are read from `source`.
///
/// # Errors
///
/// Returns the first failure; nothing is sent when the inputs are invalid.
pub async fn execute(cli: &Cli, source: &impl EnvSource) -> Result<(), RunError> {
    let config = prepare(cli, source)?;
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;

    deliver(&config, client).await
}

/// Logs the inputs and validates them into a run configuration.
fn prepare(cli: &Cli, source: &impl EnvSource) -> Result<ValidatedConfig, RunError> {
    tracing::info!("{}", StepInputs::from_source(source));

    let config = ValidatedConfig::from_source(cli, source)?;
    tracing::debug!("{config}");

    Ok(config)
}

/// Resolves the payload and delivers it through `client`.
async fn deliver<H: HttpClient>(config: &ValidatedConfig, client: H) -> Result<(), RunError> {
    let built = build_payload(&config.inputs);
    for warning in &built.warnings {
        tracing::warn!("{warning}");
    }

    let payload = built.payload;
    if config.inputs.is_debug_mode {
        tracing::info!("Parameters: {payload:?}");
    }

    let body = payload.to_json()?;
    if config.inputs.is_debug_mode {
        tracing::info!("JSON payload: {}", String::from_utf8_lossy(&body));
    }

    let webhook = FleepWebhook::new(client, config.url.clone());
    let response = webhook.send(body).await?;

    if config.inputs.is_debug_mode {
        tracing::info!("Response from Fleep: {response}");
    }
    tracing::info!("Fleep message successfully sent!");

    Ok(())
}
