// Storage traits for pluggable backends
//
// These traits let the resolver and the batch jobs run against different
// backends:
// - In-memory implementations for tests
// - Postgres implementations for production (workbench-storage)
//
// The methods are deliberately narrow: insert-if-absent and range queries
// only. The core never navigates object graphs or assumes an ambient
// session/unit-of-work.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::event::{ActivityRecord, AttendanceEvent, Employee};

// ============================================================================
// AttendanceLog - append-only explicit status log
// ============================================================================

/// Durable ordered store of explicit attendance events.
///
/// Rows are keyed by (employee_id, time) and never mutated. Concurrent
/// writers are coordinated solely through the idempotent insert: a duplicate
/// key is skipped, never an error.
#[async_trait]
pub trait AttendanceLog: Send + Sync {
    /// Insert an event unless a row with the same (employee_id, time) already
    /// exists. Returns true when a row was written, false when the duplicate
    /// was skipped.
    async fn insert_if_absent(&self, event: AttendanceEvent) -> Result<bool>;

    /// Most recent event for an employee, if any.
    async fn last_event(&self, employee_id: Uuid) -> Result<Option<AttendanceEvent>>;

    /// Events in `[from, to)` for an employee, ascending by time.
    async fn events_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AttendanceEvent>>;
}

// ============================================================================
// ActivityStore - immutable passive-activity records
// ============================================================================

/// Read access to passive activity records written by external collectors.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Records in `[from, to)` for an employee, ascending by time, skipping
    /// any record whose source_id appears in `excluded_sources`.
    async fn records_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluded_sources: &[String],
    ) -> Result<Vec<ActivityRecord>>;
}

// ============================================================================
// EmployeeDirectory - read-only identity lookup
// ============================================================================

/// Read-only employee lookup used by the batch jobs to select their targets.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// All employees the batch jobs should process.
    async fn active_employees(&self) -> Result<Vec<Employee>>;

    /// Single employee lookup.
    async fn get(&self, employee_id: Uuid) -> Result<Option<Employee>>;
}
