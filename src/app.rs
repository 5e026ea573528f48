//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
///
/// Every failure maps to the same code; the runner only distinguishes
/// success from failure.
pub mod exit_code {
    /// Message sent and acknowledged.
    pub const SUCCESS: u8 = 0;

    /// Any failure - invalid input, transport error, rejected message.
    pub const FAILURE: u8 = 1;

    /// Maps the outcome of a run to its exit code.
    #[must_use]
    pub const fn for_outcome<T, E>(outcome: &Result<T, E>) -> u8 {
        match outcome {
            Ok(_) => SUCCESS,
            Err(_) => FAILURE,
        }
    }
}

/// Logs a hint naming the input to fix, for configuration errors.
pub fn log_error_hint(error: &RunError) {
    if let RunError::Config(e) = error {
        tracing::error!("Check the '{}' input of the step.", e.input());
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Debug mode lowers the default level to DEBUG; `RUST_LOG` overrides both.
pub fn setup_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
