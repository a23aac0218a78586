//! UI audit configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_analysis_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Simulated analysis time before a report is shown, in milliseconds.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}

impl AuditConfig {
    #[must_use]
    pub const fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}
