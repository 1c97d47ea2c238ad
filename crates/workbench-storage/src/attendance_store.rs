// Database-backed implementations of the core storage traits
//
// Thin wrappers over Database that translate rows into core types and map
// sqlx failures into the core error taxonomy. Business rules live in
// workbench-core; nothing here filters or reorders beyond the SQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use workbench_core::{
    ActivityRecord, ActivityStore, AttendanceError, AttendanceEvent, AttendanceLog, Employee,
    EmployeeDirectory, Result,
};

use crate::models::EmployeeRow;
use crate::repositories::{CreateAttendanceEvent, Database};

// ============================================================================
// DbAttendanceLog
// ============================================================================

/// Attendance log backed by the attendance_events table.
#[derive(Clone)]
pub struct DbAttendanceLog {
    db: Database,
}

impl DbAttendanceLog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceLog for DbAttendanceLog {
    async fn insert_if_absent(&self, event: AttendanceEvent) -> Result<bool> {
        self.db
            .insert_attendance_event(CreateAttendanceEvent {
                employee_id: event.employee_id,
                status: event.status.to_string(),
                time: event.time,
                source: event.source,
            })
            .await
            .map_err(|e| AttendanceError::log(e.to_string()))
    }

    async fn last_event(&self, employee_id: Uuid) -> Result<Option<AttendanceEvent>> {
        let row = self
            .db
            .last_attendance_event(employee_id)
            .await
            .map_err(|e| AttendanceError::log(e.to_string()))?;
        row.map(AttendanceEvent::try_from).transpose()
    }

    async fn events_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AttendanceEvent>> {
        let rows = self
            .db
            .attendance_events_between(employee_id, from, to)
            .await
            .map_err(|e| AttendanceError::log(e.to_string()))?;
        rows.into_iter().map(AttendanceEvent::try_from).collect()
    }
}

// ============================================================================
// DbActivityStore
// ============================================================================

/// Activity reader backed by the activity_records table.
#[derive(Clone)]
pub struct DbActivityStore {
    db: Database,
}

impl DbActivityStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityStore for DbActivityStore {
    async fn records_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluded_sources: &[String],
    ) -> Result<Vec<ActivityRecord>> {
        let rows = self
            .db
            .activity_between(employee_id, from, to, excluded_sources)
            .await
            .map_err(|e| AttendanceError::activity(e.to_string()))?;
        Ok(rows.into_iter().map(ActivityRecord::from).collect())
    }
}

// ============================================================================
// DbEmployeeDirectory
// ============================================================================

/// Employee lookup backed by the employees table.
#[derive(Clone)]
pub struct DbEmployeeDirectory {
    db: Database,
}

impl DbEmployeeDirectory {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeDirectory for DbEmployeeDirectory {
    async fn active_employees(&self) -> Result<Vec<Employee>> {
        let rows = self
            .db
            .list_active_employees()
            .await
            .map_err(|e| AttendanceError::directory(e.to_string()))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get(&self, employee_id: Uuid) -> Result<Option<Employee>> {
        let row: Option<EmployeeRow> = self
            .db
            .get_employee(employee_id)
            .await
            .map_err(|e| AttendanceError::directory(e.to_string()))?;
        Ok(row.map(Employee::from))
    }
}
