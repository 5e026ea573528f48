//! Error types for configuration loading and validation.

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is raised before any network activity takes place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The webhook URL input is empty or unset.
    #[error("No Webhook URL parameter specified")]
    MissingWebhookUrl,

    /// The message input is empty or unset.
    #[error("No Message parameter specified")]
    MissingMessage,

    /// The webhook URL is present but cannot be parsed.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The request timeout is zero or not a whole number of seconds.
    #[error("Invalid request timeout '{value}': {reason}")]
    InvalidTimeout {
        /// The value as provided
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Returns the name of the input the error refers to.
    #[must_use]
    pub const fn input(&self) -> &'static str {
        use super::env::var;

        match self {
            Self::MissingWebhookUrl | Self::InvalidUrl { .. } => var::WEBHOOK_URL,
            Self::MissingMessage => var::MESSAGE,
            Self::InvalidTimeout { .. } => var::REQUEST_TIMEOUT,
        }
    }
}
