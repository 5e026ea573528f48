//! Fleep webhook sender.

use super::{HttpClient, HttpRequest, HttpResponse, WebhookError};

/// Body the Fleep endpoint answers with when it accepts a message.
pub const ACCEPTED_BODY: &str = "ok";

/// Delivers serialized payloads to a Fleep incoming webhook.
///
/// Each call to [`FleepWebhook::send`] performs exactly one POST; there
/// are no retries.
///
/// # Example
///
/// ```
/// use fleep_notify::webhook::{FleepWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = FleepWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://fleep.io/hook/abc").unwrap(),
/// );
/// assert_eq!(webhook.url().host_str(), Some("fleep.io"));
/// ```
#[derive(Debug)]
pub struct FleepWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> FleepWebhook<H> {
    /// Creates a sender posting to `url` through `client`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> FleepWebhook<H> {
    /// Posts a JSON body and interprets the answer.
    ///
    /// Returns the response body text when the message was accepted.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Transport`] if the request cannot be completed
    /// - [`WebhookError::Rejected`] if the endpoint does not answer `200 ok`
    pub async fn send(&self, body: Vec<u8>) -> Result<String, WebhookError> {
        let request = HttpRequest::post_json(self.url.clone(), body);
        let response = self.client.request(request).await?;

        tracing::debug!(status = %response.status, "Webhook responded");
        interpret(&response)
    }
}

/// Decides whether a webhook response means the message was accepted.
///
/// Only status 200 with a body of `ok` (surrounding whitespace ignored)
/// counts as success.
///
/// # Errors
///
/// Returns [`WebhookError::Rejected`] for any other status or body.
pub fn interpret(response: &HttpResponse) -> Result<String, WebhookError> {
    let body = response.body_text();

    if response.status == http::StatusCode::OK && body.trim() == ACCEPTED_BODY {
        return Ok(body);
    }

    Err(WebhookError::Rejected {
        status: response.status,
        body,
    })
}
