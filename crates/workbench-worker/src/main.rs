use std::sync::Arc;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workbench_storage::{Database, DbActivityStore, DbAttendanceLog, DbEmployeeDirectory};
use workbench_worker::{AutoLeaveRun, CorrectorRun, WorkerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workbench_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("workbench-worker starting...");

    let config = WorkerConfig::from_env();
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let log: Arc<DbAttendanceLog> = Arc::new(DbAttendanceLog::new(db.clone()));
    let activity = Arc::new(DbActivityStore::new(db.clone()));
    let directory = Arc::new(DbEmployeeDirectory::new(db));
    let attendance_config = config.attendance_config();

    let corrector_run = Arc::new(CorrectorRun::new(
        log.clone(),
        activity,
        directory.clone(),
        attendance_config.clone(),
    ));
    let auto_leave_run = Arc::new(AutoLeaveRun::new(log, directory, attendance_config));

    // Nightly corrector for yesterday at the configured UTC hour
    let corrector_hour = config.corrector_hour_utc();
    let corrector_task = tokio::spawn({
        let corrector_run = corrector_run.clone();
        async move {
            loop {
                tokio::time::sleep(sleep_until_hour(corrector_hour)).await;
                if let Err(e) = corrector_run.run_for_yesterday().await {
                    tracing::error!(error = %e, "corrector run aborted");
                }
            }
        }
    });

    // Auto-leave sweep on a fixed interval, first tick immediately
    let sweep_interval = config.auto_leave_interval_secs();
    let auto_leave_task = tokio::spawn({
        let auto_leave_run = auto_leave_run.clone();
        async move {
            let mut interval =
                tokio::time::interval(StdDuration::from_secs(sweep_interval));
            loop {
                interval.tick().await;
                if let Err(e) = auto_leave_run.run().await {
                    tracing::error!(error = %e, "auto-leave sweep aborted");
                }
            }
        }
    });

    tracing::info!(
        corrector_hour_utc = corrector_hour,
        auto_leave_interval_secs = sweep_interval,
        "jobs scheduled, waiting for shutdown signal..."
    );
    tokio::signal::ctrl_c().await?;

    corrector_task.abort();
    auto_leave_task.abort();
    tracing::info!("Worker shutdown complete");
    Ok(())
}

/// Duration until the next occurrence of `hour:00:00` UTC.
fn sleep_until_hour(hour: u32) -> StdDuration {
    let now = Utc::now();
    let today_run = now
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .expect("configured hour is clamped to 0..=23")
        .and_utc();
    let next = if now >= today_run {
        today_run + Duration::days(1)
    } else {
        today_run
    };
    (next - now).to_std().unwrap_or(StdDuration::from_secs(0))
}
