// Periodic auto-leave sweep

use std::sync::Arc;

use chrono::{DateTime, Utc};
use workbench_core::{
    AttendanceConfig, AttendanceLog, AutoLeave, EmployeeDirectory, Result,
};

use crate::jobs::RunSummary;

pub struct AutoLeaveRun {
    auto_leave: AutoLeave,
    directory: Arc<dyn EmployeeDirectory>,
}

impl AutoLeaveRun {
    pub fn new(
        log: Arc<dyn AttendanceLog>,
        directory: Arc<dyn EmployeeDirectory>,
        config: AttendanceConfig,
    ) -> Self {
        Self {
            auto_leave: AutoLeave::new(log, directory.clone(), config),
            directory,
        }
    }

    /// Sweep every active employee at the given instant.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary> {
        let employees = self.directory.active_employees().await?;

        let mut summary = RunSummary::default();
        for employee in employees {
            summary.processed += 1;
            match self.auto_leave.sweep_employee_at(employee.id, now).await {
                Ok(closed) => {
                    summary.synthesized += closed as usize;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        employee = %employee.id,
                        error = %e,
                        "auto-leave sweep failed for employee, continuing"
                    );
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            failed = summary.failed,
            closed = summary.synthesized,
            "auto-leave sweep finished"
        );
        Ok(summary)
    }

    /// Sweep at the current instant (the scheduled entry point).
    pub async fn run(&self) -> Result<RunSummary> {
        self.run_at(Utc::now()).await
    }
}
