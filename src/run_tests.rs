//! Tests for the run module.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use super::*;
use crate::app::exit_code;
use fleep_notify::config::env::var;
use mockito::Matcher;
use serde_json::json;

/// Client that connects directly, ignoring any proxy set in the environment.
fn direct_client() -> ReqwestClient {
    ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

fn inputs(url: &str) -> StepInputs {
    StepInputs {
        webhook_url: url.to_string(),
        message: "hello".to_string(),
        ..StepInputs::default()
    }
}

fn source(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn config(inputs: StepInputs) -> ValidatedConfig {
    ValidatedConfig::from_raw(&Cli::default(), inputs, None).unwrap()
}

async fn mock_endpoint(
    server: &mut mockito::Server,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", "/hook")
        .match_header("content-type", "application/json")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

mod run_error {
    use super::*;

    #[test]
    fn config_error_mentions_input() {
        let error = RunError::from(ConfigError::MissingWebhookUrl);

        assert_eq!(
            error.to_string(),
            "Issue with input: No Webhook URL parameter specified"
        );
    }

    #[test]
    fn webhook_error_is_transparent() {
        let error = RunError::from(WebhookError::Transport(HttpError::Timeout));

        assert_eq!(
            error.to_string(),
            "Failed to send the request: Request timed out"
        );
    }

    #[test]
    fn every_error_maps_to_failure_exit_code() {
        let outcome: Result<(), RunError> = Err(ConfigError::MissingMessage.into());

        assert_eq!(exit_code::for_outcome(&outcome), exit_code::FAILURE);
    }
}

mod validation_before_network {
    use super::*;

    #[tokio::test]
    async fn empty_webhook_url_fails_with_config_error() {
        let source = source(&[(var::MESSAGE, "hello")]);

        let result = execute(&Cli::default(), &source).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::MissingWebhookUrl))
        ));
    }

    #[tokio::test]
    async fn empty_message_fails_without_sending() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let url = format!("{}/hook", server.url());
        let source = source(&[(var::WEBHOOK_URL, url.as_str())]);

        let result = execute(&Cli::default(), &source).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::MissingMessage))
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_timeout_input_fails_before_sending() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let url = format!("{}/hook", server.url());
        let source = source(&[
            (var::WEBHOOK_URL, url.as_str()),
            (var::MESSAGE, "hello"),
            (var::REQUEST_TIMEOUT, "never"),
        ]);

        let result = execute(&Cli::default(), &source).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::InvalidTimeout { ref value, .. }))
                if value == "never"
        ));
        mock.assert_async().await;
    }
}

mod delivery {
    use super::*;

    #[tokio::test]
    async fn ok_response_succeeds_with_zero_exit_code() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_endpoint(&mut server, 200, "ok").await;
        let config = config(inputs(&format!("{}/hook", server.url())));

        let outcome = deliver(&config, direct_client()).await;

        mock.assert_async().await;
        assert!(outcome.is_ok());
        assert_eq!(exit_code::for_outcome(&outcome), exit_code::SUCCESS);
    }

    #[tokio::test]
    async fn error_body_with_200_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_endpoint(&mut server, 200, "error: invalid token").await;
        let config = config(inputs(&format!("{}/hook", server.url())));

        let outcome = deliver(&config, direct_client()).await;

        assert!(matches!(
            outcome,
            Err(RunError::Webhook(WebhookError::Rejected { ref body, .. }))
                if body == "error: invalid token"
        ));
        assert_eq!(exit_code::for_outcome(&outcome), exit_code::FAILURE);
    }

    #[tokio::test]
    async fn server_error_fails_regardless_of_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_endpoint(&mut server, 500, "ok").await;
        let config = config(inputs(&format!("{}/hook", server.url())));

        let outcome = deliver(&config, direct_client()).await;

        assert!(matches!(
            outcome,
            Err(RunError::Webhook(WebhookError::Rejected { status, .. }))
                if status.as_u16() == 500
        ));
        assert_eq!(exit_code::for_outcome(&outcome), exit_code::FAILURE);
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_with_transport_error() {
        // Bind then drop a listener to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = config(inputs(&format!("http://127.0.0.1:{port}/hook")));

        let outcome = deliver(&config, direct_client()).await;

        assert!(matches!(
            outcome,
            Err(RunError::Webhook(WebhookError::Transport(_)))
        ));
        assert_eq!(exit_code::for_outcome(&outcome), exit_code::FAILURE);
    }

    #[tokio::test]
    async fn sends_message_without_user_when_no_username() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Json(json!({"message": "line1\nline2"})))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;
        let inputs = StepInputs {
            message: "line1\\nline2".to_string(),
            ..inputs(&format!("{}/hook", server.url()))
        };

        let outcome = deliver(&config(inputs), direct_client()).await;

        mock.assert_async().await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn failed_build_sends_error_overrides() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Json(json!({"message": "oops", "user": "sad-bot"})))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;
        let inputs = StepInputs {
            message_on_error: "oops".to_string(),
            from_username: "bot".to_string(),
            from_username_on_error: "sad-bot".to_string(),
            is_build_failed: true,
            ..inputs(&format!("{}/hook", server.url()))
        };

        let outcome = deliver(&config(inputs), direct_client()).await;

        mock.assert_async().await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn failed_build_without_overrides_still_sends_defaults() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Json(json!({"message": "hello", "user": "bot"})))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;
        let inputs = StepInputs {
            from_username: "bot".to_string(),
            is_build_failed: true,
            is_debug_mode: true,
            ..inputs(&format!("{}/hook", server.url()))
        };

        let outcome = deliver(&config(inputs), direct_client()).await;

        mock.assert_async().await;
        assert!(outcome.is_ok());
    }
}

mod logging {
    use super::*;

    /// Shared buffer the fmt layer writes formatted events into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        (logs, tracing::subscriber::set_default(subscriber))
    }

    #[tokio::test]
    async fn missing_error_overrides_are_logged_as_warnings() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_endpoint(&mut server, 200, "ok").await;
        let inputs = StepInputs {
            from_username: "bot".to_string(),
            is_build_failed: true,
            ..inputs(&format!("{}/hook", server.url()))
        };
        let (logs, _guard) = capture();

        let outcome = deliver(&config(inputs), direct_client()).await;

        assert!(outcome.is_ok());
        let text = logs.text();
        let warnings: Vec<&str> = text.lines().filter(|l| l.contains(" WARN ")).collect();
        assert_eq!(warnings.len(), 2, "logs were:\n{text}");
        assert!(warnings[0].contains("no message_on_error defined"));
        assert!(warnings[1].contains("no from_username_on_error defined"));
        assert!(!text.contains("ERROR"));
    }

    #[tokio::test]
    async fn successful_build_logs_no_warnings() {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_endpoint(&mut server, 200, "ok").await;
        let config = config(inputs(&format!("{}/hook", server.url())));
        let (logs, _guard) = capture();

        let outcome = deliver(&config, direct_client()).await;

        assert!(outcome.is_ok());
        let text = logs.text();
        assert!(!text.contains(" WARN "), "logs were:\n{text}");
        assert!(text.contains("Fleep message successfully sent!"));
    }
}
