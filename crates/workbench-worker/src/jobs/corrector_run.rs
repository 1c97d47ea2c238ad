// Nightly corrector run
//
// One run covers one calendar day (normally yesterday) for every active
// employee. Per-employee storage faults are logged and skipped so the rest
// of the population still gets corrected.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use workbench_core::{
    ActivityStore, AttendanceConfig, AttendanceLog, EmployeeDirectory, LogCorrector, Result,
};

use crate::jobs::RunSummary;

pub struct CorrectorRun {
    corrector: LogCorrector,
    directory: Arc<dyn EmployeeDirectory>,
}

impl CorrectorRun {
    pub fn new(
        log: Arc<dyn AttendanceLog>,
        activity: Arc<dyn ActivityStore>,
        directory: Arc<dyn EmployeeDirectory>,
        config: AttendanceConfig,
    ) -> Self {
        Self {
            corrector: LogCorrector::new(log, activity, config),
            directory,
        }
    }

    /// Correct every active employee for `day`.
    ///
    /// Only a directory failure (no employee list) aborts the run; everything
    /// per-employee is isolated.
    pub async fn run_for_day(&self, day: NaiveDate) -> Result<RunSummary> {
        let employees = self.directory.active_employees().await?;
        tracing::info!(%day, employees = employees.len(), "corrector run starting");

        let mut summary = RunSummary::default();
        for employee in employees {
            summary.processed += 1;
            match self.corrector.correct_day(employee.id, day).await {
                Ok(report) => {
                    summary.synthesized += report.synthesized;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        employee = %employee.id,
                        %day,
                        error = %e,
                        "correction failed for employee, continuing"
                    );
                }
            }
        }

        tracing::info!(
            %day,
            processed = summary.processed,
            failed = summary.failed,
            synthesized = summary.synthesized,
            "corrector run finished"
        );
        Ok(summary)
    }

    /// Correct every active employee for yesterday (the scheduled entry
    /// point).
    pub async fn run_for_yesterday(&self) -> Result<RunSummary> {
        let yesterday = (Utc::now() - Duration::days(1)).date_naive();
        self.run_for_day(yesterday).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use uuid::Uuid;
    use workbench_core::{
        ActivityRecord, Employee, InMemoryActivityStore, InMemoryAttendanceLog,
        InMemoryEmployeeDirectory, Status,
    };

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, h, m, s).unwrap()
    }

    fn employee(id: Uuid, active: bool) -> Employee {
        Employee {
            id,
            name: "Sam".into(),
            active,
            last_login_at: None,
        }
    }

    fn activity(emp: Uuid, time: DateTime<Utc>, duration_secs: i64) -> ActivityRecord {
        ActivityRecord {
            employee_id: emp,
            source_id: "tracker".into(),
            action: "edit".into(),
            target_id: "doc-1".into(),
            time,
            duration_secs,
        }
    }

    #[tokio::test]
    async fn corrects_all_active_employees_and_skips_inactive() {
        let log = Arc::new(InMemoryAttendanceLog::new());
        let activity_store = Arc::new(InMemoryActivityStore::new());
        let directory = Arc::new(InMemoryEmployeeDirectory::new());

        let worker_a = Uuid::now_v7();
        let worker_b = Uuid::now_v7();
        let former = Uuid::now_v7();
        directory
            .seed(vec![
                employee(worker_a, true),
                employee(worker_b, true),
                employee(former, false),
            ])
            .await;
        activity_store
            .seed(vec![
                activity(worker_a, at(9, 0, 0), 3600),
                activity(former, at(9, 0, 0), 3600),
            ])
            .await;

        let run = CorrectorRun::new(
            log.clone(),
            activity_store,
            directory,
            AttendanceConfig::default(),
        );
        let summary = run.run_for_day(day()).await.unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.synthesized, 2);

        // Active employee with activity got COME + closing LEAVE
        let events = log.all_events(worker_a).await;
        assert_eq!(events[0].status, Status::Come);
        // Quiet active employee and inactive employee stay untouched
        assert!(log.all_events(worker_b).await.is_empty());
        assert!(log.all_events(former).await.is_empty());
    }
}
