//! Payload resolution from step inputs.

use std::fmt;

use serde::Serialize;

use crate::config::StepInputs;

use super::PayloadError;

/// Body of a Fleep incoming webhook request.
///
/// Serializes to `{"message": "...", "user": "..."}`. The `user` field is
/// left out entirely when no sender name was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleepPayload {
    /// Message text
    pub message: String,

    /// Sender display name
    #[serde(rename = "user", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl FleepPayload {
    /// Encodes the payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, PayloadError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// A fallback taken while resolving the payload of a failed build.
///
/// Warnings never fail the run; the caller is expected to log them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadWarning {
    /// The build failed but `message_on_error` is empty.
    MissingMessageOnError,
    /// The build failed but `from_username_on_error` is empty.
    MissingUsernameOnError,
}

impl fmt::Display for PayloadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMessageOnError => {
                f.write_str("Build failed but no message_on_error defined, using default.")
            }
            Self::MissingUsernameOnError => {
                f.write_str("Build failed but no from_username_on_error defined, using default.")
            }
        }
    }
}

/// Result of [`build_payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPayload {
    /// The resolved payload
    pub payload: FleepPayload,
    /// Fallbacks taken, in resolution order
    pub warnings: Vec<PayloadWarning>,
}

/// Resolves the payload to send from the step inputs.
///
/// On a failed build the `*_on_error` inputs replace their normal
/// counterparts when set. An empty override keeps the normal value and
/// records a [`PayloadWarning`].
#[must_use]
pub fn build_payload(inputs: &StepInputs) -> BuiltPayload {
    let mut warnings = Vec::new();

    let mut message = inputs.message.as_str();
    if inputs.is_build_failed {
        if inputs.message_on_error.is_empty() {
            warnings.push(PayloadWarning::MissingMessageOnError);
        } else {
            message = inputs.message_on_error.as_str();
        }
    }

    let mut username = Some(inputs.from_username.as_str()).filter(|name| !name.is_empty());
    if inputs.is_build_failed {
        if inputs.from_username_on_error.is_empty() {
            warnings.push(PayloadWarning::MissingUsernameOnError);
        } else {
            username = Some(inputs.from_username_on_error.as_str());
        }
    }

    BuiltPayload {
        payload: FleepPayload {
            message: normalize_newlines(message),
            username: username.map(ToString::to_string),
        },
        warnings,
    }
}

/// Replaces each literal backslash-`n` pair with a newline character.
///
/// CI inputs frequently arrive with newlines escaped.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
