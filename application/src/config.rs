//! Application-level configuration.
//!
//! Controls how use cases behave around the styling service call.

use std::time::Duration;

/// Application behavior configuration.
///
/// No timeout by default: a request only settles when the service answers
/// or the transport fails.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a suggestion before giving up.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}
