//! CLI argument parsing using clap.
//!
//! Step inputs arrive through the environment; the command line only carries
//! runner-level tuning.

use clap::Parser;

/// Fleep notify: posts a message to a Fleep conversation webhook.
///
/// Inputs are read from the environment (`webhook_url`, `message`,
/// `message_on_error`, `from_username`, `from_username_on_error`,
/// `is_debug_mode`, `STEPLIB_BUILD_STATUS`).
#[derive(Debug, Default, Parser)]
#[command(name = "fleep-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Request deadline in seconds (overrides the `request_timeout` input)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
