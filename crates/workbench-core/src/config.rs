// Attendance configuration
//
// All thresholds are explicit constructor inputs rather than ambient
// process-wide settings, so the resolver, corrector and auto-leave job can be
// instantiated with different values in tests.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration shared by the corrector and the auto-leave job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Symmetric padding applied around instant activity pings, in seconds
    #[serde(default = "default_activity_padding_secs")]
    pub activity_padding_secs: u32,

    /// Trailing inactivity window after which auto-leave closes an open
    /// status, in seconds
    #[serde(default = "default_inactivity_window_secs")]
    pub inactivity_window_secs: u32,

    /// Activity source_ids that must not, by themselves, imply work presence
    /// (social/communication-only collectors)
    #[serde(default)]
    pub excluded_activity_sources: Vec<String>,
}

fn default_activity_padding_secs() -> u32 {
    15 * 60
}

fn default_inactivity_window_secs() -> u32 {
    3 * 60 * 60
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            activity_padding_secs: default_activity_padding_secs(),
            inactivity_window_secs: default_inactivity_window_secs(),
            excluded_activity_sources: Vec::new(),
        }
    }
}

impl AttendanceConfig {
    pub fn activity_padding(&self) -> Duration {
        Duration::seconds(self.activity_padding_secs as i64)
    }

    pub fn inactivity_window(&self) -> Duration {
        Duration::seconds(self.inactivity_window_secs as i64)
    }

    /// Replace the excluded activity sources
    pub fn with_excluded_sources(mut self, sources: Vec<String>) -> Self {
        self.excluded_activity_sources = sources;
        self
    }
}
