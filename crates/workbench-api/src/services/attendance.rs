// Attendance service
//
// Wires the database-backed stores into the core resolver and exposes the
// operations the HTTP surface and the TM bridge share. Unknown employees are
// resolved here so handlers can answer 404 before touching the log.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use workbench_core::{
    CurrentStatus, EmployeeDirectory, Result, Status, StatusChange, StatusResolver,
};
use workbench_storage::{Database, DbAttendanceLog, DbEmployeeDirectory};

pub struct AttendanceService {
    resolver: StatusResolver,
    directory: Arc<DbEmployeeDirectory>,
}

impl AttendanceService {
    pub fn new(db: Arc<Database>) -> Self {
        let log = Arc::new(DbAttendanceLog::new((*db).clone()));
        Self {
            resolver: StatusResolver::new(log),
            directory: Arc::new(DbEmployeeDirectory::new((*db).clone())),
        }
    }

    /// Active employees, as listed by the directory.
    pub async fn list_employees(&self) -> Result<Vec<workbench_core::Employee>> {
        self.directory.active_employees().await
    }

    /// Current status, after verifying the employee exists.
    pub async fn current_status(&self, employee_id: Uuid) -> Result<Option<CurrentStatus>> {
        if self.directory.get(employee_id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.resolver.current_status(employee_id).await?))
    }

    /// Record a transition, after verifying the employee exists.
    pub async fn set_status(
        &self,
        employee_id: Uuid,
        status: Status,
        source: &str,
        at: Option<DateTime<Utc>>,
    ) -> Result<Option<StatusChange>> {
        if self.directory.get(employee_id).await?.is_none() {
            return Ok(None);
        }
        Ok(Some(
            self.resolver.set_status(employee_id, status, source, at).await?,
        ))
    }
}
