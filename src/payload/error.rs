//! Error types for payload serialization.

use thiserror::Error;

/// Error type for payload operations.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload could not be encoded as JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
