//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The URL was rejected by the HTTP client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a single webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request could not be completed.
    #[error("Failed to send the request: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with something other than `200 ok`.
    #[error("Request failed with status {status}. Response from Fleep: {body}")]
    Rejected {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body text
        body: String,
    },
}
