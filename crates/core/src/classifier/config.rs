use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classifier configuration.
///
/// Fixed-cadence polling, no backoff: assistant runs for a two-field
/// classification are short and bounded, so a plain interval is enough.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Interval between run status checks in milliseconds (default: 1000)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Maximum number of status checks before giving up (default: 30)
    #[serde(default = "default_max_checks")]
    pub max_checks: u32,
}

impl ClassifierConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_checks: default_max_checks(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_max_checks() -> u32 {
    30
}
