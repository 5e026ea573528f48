//! Fleep notify: CI step delivering a message to a Fleep webhook.
//!
//! Entry point for the fleep-notify application.

use fleep_notify::config::{Cli, ProcessEnv, StepInputs};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, log_error_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    setup_tracing(StepInputs::from_source(&ProcessEnv).is_debug_mode);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return ExitCode::from(exit_code::FAILURE);
        }
    };

    let outcome = runtime.block_on(run::execute(&cli, &ProcessEnv));
    if let Err(ref e) = outcome {
        tracing::error!("{e}");
        log_error_hint(e);
    }

    ExitCode::from(exit_code::for_outcome(&outcome))
}
