// Database models (internal, may differ from the core domain types)
//
// Status is stored as text; rows convert into core types at the store
// boundary so nothing above this crate sees raw strings.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use workbench_core::{ActivityRecord, AttendanceError, AttendanceEvent, Employee};

// ============================================
// Attendance events (append-only, month-partitioned)
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct AttendanceEventRow {
    pub employee_id: Uuid,
    pub status: String,
    pub time: DateTime<Utc>,
    pub source: String,
}

impl TryFrom<AttendanceEventRow> for AttendanceEvent {
    type Error = AttendanceError;

    fn try_from(row: AttendanceEventRow) -> Result<Self, Self::Error> {
        Ok(AttendanceEvent {
            employee_id: row.employee_id,
            status: row.status.parse()?,
            time: row.time,
            source: row.source,
        })
    }
}

// ============================================
// Activity records (immutable, collector-owned)
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ActivityRecordRow {
    pub employee_id: Uuid,
    pub source_id: String,
    pub action: String,
    pub target_id: String,
    pub time: DateTime<Utc>,
    pub duration_secs: i64,
}

impl From<ActivityRecordRow> for ActivityRecord {
    fn from(row: ActivityRecordRow) -> Self {
        ActivityRecord {
            employee_id: row.employee_id,
            source_id: row.source_id,
            action: row.action,
            target_id: row.target_id,
            time: row.time,
            duration_secs: row.duration_secs,
        }
    }
}

// ============================================
// Employees (read-only for this subsystem)
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            active: row.active,
            last_login_at: row.last_login_at,
        }
    }
}
