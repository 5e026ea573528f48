//! Key-value sources the step inputs are read from.
//!
//! The CI runner hands inputs to the step as environment variables. Reading
//! goes through [`EnvSource`] so that tests can supply a plain map instead of
//! mutating the process environment.

use std::collections::{BTreeMap, HashMap};

/// Names of the environment variables the step reads.
pub mod var {
    /// Destination webhook URL (required).
    pub const WEBHOOK_URL: &str = "webhook_url";
    /// Sender display name for normal messages.
    pub const FROM_USERNAME: &str = "from_username";
    /// Sender display name used when the build failed.
    pub const FROM_USERNAME_ON_ERROR: &str = "from_username_on_error";
    /// Message body (required).
    pub const MESSAGE: &str = "message";
    /// Message body used when the build failed.
    pub const MESSAGE_ON_ERROR: &str = "message_on_error";
    /// `"yes"` enables debug output.
    pub const IS_DEBUG_MODE: &str = "is_debug_mode";
    /// Build status reported by the CI runner.
    pub const BUILD_STATUS: &str = "STEPLIB_BUILD_STATUS";
    /// Optional request deadline in seconds.
    pub const REQUEST_TIMEOUT: &str = "request_timeout";
}

/// Value of [`var::IS_DEBUG_MODE`] that turns debug mode on.
pub const DEBUG_MODE_ENABLED: &str = "yes";

/// Value of [`var::BUILD_STATUS`] that marks a successful build.
///
/// Every other value, including an unset variable, means the build failed.
pub const BUILD_STATUS_SUCCESS: &str = "0";

/// A read-only source of named string values.
pub trait EnvSource {
    /// Returns the value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value for `key`, or an empty string when it is not set.
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}

/// Reads from the environment of the current process.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
