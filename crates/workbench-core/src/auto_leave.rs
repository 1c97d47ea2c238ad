// Auto-leave safeguard
//
// Periodic sweep closing statuses left open after a client disconnects: when
// neither the last login nor the last explicit transition is inside the
// trailing inactivity window, a LEAVE is written one second after the later
// of the two signals. Idle detection proper is the corrector's job; this only
// guarantees nobody stays "present" forever.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AttendanceConfig;
use crate::error::Result;
use crate::resolver::StatusResolver;
use crate::status::Status;
use crate::traits::{AttendanceLog, EmployeeDirectory};

/// Source tag carried by auto-leave events.
pub const AUTO_LEAVE_SOURCE: &str = "auto";

/// Closes stale open statuses across the active employee population.
#[derive(Clone)]
pub struct AutoLeave {
    resolver: StatusResolver,
    directory: Arc<dyn EmployeeDirectory>,
    config: AttendanceConfig,
}

impl AutoLeave {
    pub fn new(
        log: Arc<dyn AttendanceLog>,
        directory: Arc<dyn EmployeeDirectory>,
        config: AttendanceConfig,
    ) -> Self {
        Self {
            resolver: StatusResolver::new(log),
            directory,
            config,
        }
    }

    pub fn directory(&self) -> &Arc<dyn EmployeeDirectory> {
        &self.directory
    }

    /// Evaluate one employee at the given instant. Returns true when a LEAVE
    /// was recorded.
    ///
    /// `now` is an explicit parameter so the threshold can be tested without
    /// a clock; production callers pass `Utc::now()`.
    pub async fn sweep_employee_at(
        &self,
        employee_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let current = self.resolver.current_status(employee_id).await?;
        if current.status == Status::Leave {
            return Ok(false);
        }

        let last_login = match self.directory.get(employee_id).await? {
            Some(employee) => employee.last_login_at,
            None => None,
        };

        // Latest sign of life across both signals. A non-LEAVE status always
        // has a transition time behind it.
        let anchor = match (current.since, last_login) {
            (Some(since), Some(login)) => since.max(login),
            (Some(since), None) => since,
            (None, Some(login)) => login,
            (None, None) => return Ok(false),
        };

        if now - anchor < self.config.inactivity_window() {
            return Ok(false);
        }

        let change = self
            .resolver
            .set_status(
                employee_id,
                Status::Leave,
                AUTO_LEAVE_SOURCE,
                Some(anchor + chrono::Duration::seconds(1)),
            )
            .await?;
        if change.changed {
            tracing::info!(
                employee = %employee_id,
                since = %anchor,
                "auto-leave closed a stale open status"
            );
        }
        Ok(change.changed)
    }
}
