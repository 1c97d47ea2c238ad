// In-memory store implementations for tests
//
// These keep all data in memory behind the same traits the Postgres stores
// implement, so resolver/corrector/auto-leave tests exercise the production
// code paths without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::event::{ActivityRecord, AttendanceEvent, Employee};
use crate::traits::{ActivityStore, AttendanceLog, EmployeeDirectory};

// ============================================================================
// InMemoryAttendanceLog
// ============================================================================

/// In-memory attendance log keyed by employee, events kept sorted by time.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAttendanceLog {
    events: Arc<RwLock<HashMap<Uuid, Vec<AttendanceEvent>>>>,
}

impl InMemoryAttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events for an employee, ascending by time (useful in assertions)
    pub async fn all_events(&self, employee_id: Uuid) -> Vec<AttendanceEvent> {
        self.events
            .read()
            .await
            .get(&employee_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Pre-populate with events (useful for testing)
    pub async fn seed(&self, events: Vec<AttendanceEvent>) {
        let mut guard = self.events.write().await;
        for event in events {
            let list = guard.entry(event.employee_id).or_default();
            list.push(event);
            list.sort_by_key(|e| e.time);
        }
    }

    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl AttendanceLog for InMemoryAttendanceLog {
    async fn insert_if_absent(&self, event: AttendanceEvent) -> Result<bool> {
        let mut guard = self.events.write().await;
        let list = guard.entry(event.employee_id).or_default();
        if list.iter().any(|e| e.time == event.time) {
            return Ok(false);
        }
        list.push(event);
        list.sort_by_key(|e| e.time);
        Ok(true)
    }

    async fn last_event(&self, employee_id: Uuid) -> Result<Option<AttendanceEvent>> {
        Ok(self
            .events
            .read()
            .await
            .get(&employee_id)
            .and_then(|list| list.last().cloned()))
    }

    async fn events_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AttendanceEvent>> {
        Ok(self
            .events
            .read()
            .await
            .get(&employee_id)
            .map(|list| {
                list.iter()
                    .filter(|e| e.time >= from && e.time < to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

// ============================================================================
// InMemoryActivityStore
// ============================================================================

/// In-memory activity store keyed by employee.
#[derive(Debug, Default, Clone)]
pub struct InMemoryActivityStore {
    records: Arc<RwLock<HashMap<Uuid, Vec<ActivityRecord>>>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with records (useful for testing)
    pub async fn seed(&self, records: Vec<ActivityRecord>) {
        let mut guard = self.records.write().await;
        for record in records {
            let list = guard.entry(record.employee_id).or_default();
            list.push(record);
            list.sort_by_key(|r| r.time);
        }
    }

    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn records_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluded_sources: &[String],
    ) -> Result<Vec<ActivityRecord>> {
        Ok(self
            .records
            .read()
            .await
            .get(&employee_id)
            .map(|list| {
                list.iter()
                    .filter(|r| r.time >= from && r.time < to)
                    .filter(|r| !excluded_sources.iter().any(|s| s == &r.source_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

// ============================================================================
// InMemoryEmployeeDirectory
// ============================================================================

/// In-memory employee directory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeDirectory {
    employees: Arc<RwLock<HashMap<Uuid, Employee>>>,
}

impl InMemoryEmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with employees (useful for testing)
    pub async fn seed(&self, employees: Vec<Employee>) {
        let mut guard = self.employees.write().await;
        for employee in employees {
            guard.insert(employee.id, employee);
        }
    }

    /// Update one employee's last login timestamp
    pub async fn set_last_login(&self, employee_id: Uuid, at: Option<DateTime<Utc>>) {
        if let Some(employee) = self.employees.write().await.get_mut(&employee_id) {
            employee.last_login_at = at;
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn active_employees(&self) -> Result<Vec<Employee>> {
        let mut list: Vec<Employee> = self
            .employees
            .read()
            .await
            .values()
            .filter(|e| e.active)
            .cloned()
            .collect();
        list.sort_by_key(|e| e.id);
        Ok(list)
    }

    async fn get(&self, employee_id: Uuid) -> Result<Option<Employee>> {
        Ok(self.employees.read().await.get(&employee_id).cloned())
    }
}
