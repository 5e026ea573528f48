//! Fleep webhook payload.
//!
//! This module provides:
//! - The wire payload ([`FleepPayload`])
//! - Resolution of message and sender from the step inputs ([`build_payload`])
//! - Non-fatal notes produced during resolution ([`PayloadWarning`])

mod builder;
mod error;


pub use builder::{BuiltPayload, FleepPayload, PayloadWarning, build_payload, normalize_newlines};
pub use error::PayloadError;
