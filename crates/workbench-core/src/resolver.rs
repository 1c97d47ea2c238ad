// Current-status resolver
//
// Answers "what is this employee's status right now" from the most recent
// explicit log entry, and appends new transitions subject to the legality
// rule. Passive activity never overrides the explicit log on the read path;
// it only feeds the corrector, which writes explicit rows of its own.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::event::AttendanceEvent;
use crate::status::Status;
use crate::traits::AttendanceLog;

/// Result of a status read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStatus {
    pub status: Status,
    /// Time of the last explicit transition; None when the log is empty
    pub since: Option<DateTime<Utc>>,
}

/// Result of a status write attempt.
///
/// `changed == false` means the write was rejected because the status was
/// already current; callers decide whether that is a user-visible conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub status: Status,
    pub time: Option<DateTime<Utc>>,
    pub changed: bool,
}

/// Reads and conditionally appends explicit status transitions.
#[derive(Clone)]
pub struct StatusResolver {
    log: Arc<dyn AttendanceLog>,
}

impl StatusResolver {
    pub fn new(log: Arc<dyn AttendanceLog>) -> Self {
        Self { log }
    }

    /// Current status from the most recent explicit event.
    ///
    /// An employee with no explicit events is LEAVE with no timestamp.
    pub async fn current_status(&self, employee_id: Uuid) -> Result<CurrentStatus> {
        let last = self.log.last_event(employee_id).await?;
        Ok(match last {
            Some(event) => CurrentStatus {
                status: event.status,
                since: Some(event.time),
            },
            None => CurrentStatus {
                status: Status::Leave,
                since: None,
            },
        })
    }

    /// Record that the employee's status is now `status`.
    ///
    /// Rejected (`changed == false`, prior status and time returned) when the
    /// new status equals the one already current. On acceptance the event is
    /// inserted through the idempotent log write; a duplicate (employee,
    /// time) row is silently skipped and still reported as changed. Business
    /// rejection is never an error, only storage faults propagate.
    pub async fn set_status(
        &self,
        employee_id: Uuid,
        status: Status,
        source: &str,
        at: Option<DateTime<Utc>>,
    ) -> Result<StatusChange> {
        let current = self.current_status(employee_id).await?;
        if current.status == status {
            tracing::debug!(
                employee = %employee_id,
                status = %status,
                "status unchanged, rejecting transition"
            );
            return Ok(StatusChange {
                status: current.status,
                time: current.since,
                changed: false,
            });
        }

        let time = at.unwrap_or_else(Utc::now);
        let inserted = self
            .log
            .insert_if_absent(AttendanceEvent::new(employee_id, status, time, source))
            .await?;
        if !inserted {
            tracing::debug!(
                employee = %employee_id,
                %time,
                "duplicate timestamp on status write, skipped"
            );
        }

        Ok(StatusChange {
            status,
            time: Some(time),
            changed: true,
        })
    }
}
