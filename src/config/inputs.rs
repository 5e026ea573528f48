//! Step inputs as handed over by the CI runner.

use std::fmt;

use super::env::{BUILD_STATUS_SUCCESS, DEBUG_MODE_ENABLED, EnvSource, var};
use super::error::ConfigError;

/// Flat record of the step inputs.
///
/// Built once at startup and never mutated. Optional inputs that are not
/// set are represented by an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInputs {
    /// Destination webhook URL (required)
    pub webhook_url: String,

    /// Sender name for normal messages
    pub from_username: String,

    /// Sender name used instead of `from_username` when the build failed
    pub from_username_on_error: String,

    /// Message body (required)
    pub message: String,

    /// Message body used instead of `message` when the build failed
    pub message_on_error: String,

    /// Verbose diagnostics enabled
    pub is_debug_mode: bool,

    /// The build that triggered the step did not succeed
    pub is_build_failed: bool,
}

impl StepInputs {
    /// Reads all inputs from the given source.
    ///
    /// Missing values become empty strings or `false`, so this never fails.
    #[must_use]
    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            webhook_url: source.get_or_empty(var::WEBHOOK_URL),
            from_username: source.get_or_empty(var::FROM_USERNAME),
            from_username_on_error: source.get_or_empty(var::FROM_USERNAME_ON_ERROR),
            message: source.get_or_empty(var::MESSAGE),
            message_on_error: source.get_or_empty(var::MESSAGE_ON_ERROR),
            is_debug_mode: source.get_or_empty(var::IS_DEBUG_MODE) == DEBUG_MODE_ENABLED,
            is_build_failed: source.get_or_empty(var::BUILD_STATUS) != BUILD_STATUS_SUCCESS,
        }
    }

    /// Checks that the required inputs are present.
    ///
    /// The webhook URL is checked before the message; only the first
    /// violation is reported.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingWebhookUrl`] if `webhook_url` is empty
    /// - [`ConfigError::MissingMessage`] if `message` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::MissingWebhookUrl);
        }
        if self.message.is_empty() {
            return Err(ConfigError::MissingMessage);
        }
        Ok(())
    }
}

impl fmt::Display for StepInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fleep configs:")?;
        writeln!(f, " - WebhookURL: {}", self.webhook_url)?;
        writeln!(f, " - FromUsername: {}", self.from_username)?;
        writeln!(f, " - FromUsernameOnError: {}", self.from_username_on_error)?;
        writeln!(f, " - Message: {}", self.message)?;
        writeln!(f, " - MessageOnError: {}", self.message_on_error)?;
        writeln!(f, "Other configs:")?;
        writeln!(f, " - IsDebugMode: {}", self.is_debug_mode)?;
        write!(f, " - IsBuildFailed: {}", self.is_build_failed)
    }
}
