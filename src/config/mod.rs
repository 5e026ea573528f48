//! Configuration layer for the Fleep notify step.
//!
//! This module provides:
//! - Environment-style input sources ([`EnvSource`], [`ProcessEnv`])
//! - The raw step inputs and their presence checks ([`StepInputs`])
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//!
//! # Inputs
//!
//! Step inputs are read from environment variables (see [`env::var`]).
//! Unset variables read as empty strings, so the only failures are the
//! presence checks on `webhook_url` and `message` plus URL parsing.
//!
//! # Request timeout
//!
//! Resolved with the following priority (highest to lowest):
//!
//! 1. `--timeout` on the command line
//! 2. The `request_timeout` input
//! 3. No deadline (transport defaults)

mod cli;
pub mod env;
mod error;
mod inputs;
mod validated;


pub use cli::Cli;
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use inputs::StepInputs;
pub use validated::ValidatedConfig;
