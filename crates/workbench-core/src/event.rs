// Domain records: explicit log entries, passive activity, employees

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::Status;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One explicit entry in the append-only attendance log.
///
/// Identified by (employee_id, time); times have second resolution and are
/// unique per employee. Rows are never updated or deleted, and a duplicate
/// insert on the identity pair is silently skipped by every store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AttendanceEvent {
    pub employee_id: Uuid,
    pub status: Status,
    pub time: DateTime<Utc>,
    /// Free-text origin tag, e.g. "tm", "auto", "activity"
    pub source: String,
}

impl AttendanceEvent {
    pub fn new(
        employee_id: Uuid,
        status: Status,
        time: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            status,
            time,
            source: source.into(),
        }
    }
}

/// One immutable passive-activity record produced by an external collector.
///
/// `duration_secs == 0` marks a point-in-time ping; a positive duration marks
/// sustained activity starting at `time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub employee_id: Uuid,
    /// Collector identity, e.g. "vcs", "chat", "tracker"
    pub source_id: String,
    pub action: String,
    pub target_id: String,
    pub time: DateTime<Utc>,
    pub duration_secs: i64,
}

/// Employee identity as seen by the batch jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    /// Last login through any client, used by the auto-leave safeguard
    pub last_login_at: Option<DateTime<Utc>>,
}
