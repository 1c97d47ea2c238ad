// Worker configuration from environment variables

use workbench_core::AttendanceConfig;

/// Configuration for the scheduled jobs
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub database_url: Option<String>,
    /// Seconds between auto-leave sweeps
    pub auto_leave_interval_secs: Option<u64>,
    /// UTC hour at which the nightly corrector runs
    pub corrector_hour_utc: Option<u32>,
    /// Comma-separated activity source_ids that never imply presence
    pub excluded_activity_sources: Option<String>,
}

impl WorkerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            auto_leave_interval_secs: std::env::var("AUTO_LEAVE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            corrector_hour_utc: std::env::var("CORRECTOR_HOUR_UTC")
                .ok()
                .and_then(|v| v.parse().ok()),
            excluded_activity_sources: std::env::var("EXCLUDED_ACTIVITY_SOURCES").ok(),
        }
    }

    /// Get auto-leave sweep interval with default (2 hours)
    pub fn auto_leave_interval_secs(&self) -> u64 {
        self.auto_leave_interval_secs.unwrap_or(2 * 60 * 60)
    }

    /// Get corrector hour with default (02:00 UTC)
    pub fn corrector_hour_utc(&self) -> u32 {
        self.corrector_hour_utc.unwrap_or(2).min(23)
    }

    /// Attendance thresholds with the configured source exclusions applied
    pub fn attendance_config(&self) -> AttendanceConfig {
        let excluded = self
            .excluded_activity_sources
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        AttendanceConfig::default().with_excluded_sources(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = WorkerConfig {
            database_url: None,
            auto_leave_interval_secs: None,
            corrector_hour_utc: None,
            excluded_activity_sources: None,
        };
        assert_eq!(config.auto_leave_interval_secs(), 7200);
        assert_eq!(config.corrector_hour_utc(), 2);
        assert!(config.attendance_config().excluded_activity_sources.is_empty());
    }

    #[test]
    fn excluded_sources_are_split_and_trimmed() {
        let config = WorkerConfig {
            database_url: None,
            auto_leave_interval_secs: None,
            corrector_hour_utc: None,
            excluded_activity_sources: Some("chat, social,,forum".into()),
        };
        assert_eq!(
            config.attendance_config().excluded_activity_sources,
            vec!["chat", "social", "forum"]
        );
    }
}
