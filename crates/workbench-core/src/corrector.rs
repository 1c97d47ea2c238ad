// Retroactive log corrector
//
// Nightly reconciliation of one employee's explicit attendance log against
// the activity intervals observed on one past day. Walks explicit events and
// merged intervals together in time order and synthesizes the minimal set of
// transitions so that every busy interval is covered by an open presence
// state, without deleting or contradicting any pre-existing row.
//
// All synthesized writes go through the idempotent insert; a concurrent
// writer landing on the same timestamp is skipped silently and the walk
// continues on its locally tracked state. The next scheduled run self-heals
// any divergence.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::config::AttendanceConfig;
use crate::error::Result;
use crate::event::AttendanceEvent;
use crate::intervals::merge_activity;
use crate::status::Status;
use crate::traits::{ActivityStore, AttendanceLog};

/// Source tag carried by every corrector-synthesized event.
pub const CORRECTION_SOURCE: &str = "activity";

/// Outcome of one employee-day correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrectionReport {
    /// Merged activity intervals processed
    pub intervals: usize,
    /// Events actually written (duplicates skipped by a concurrent writer
    /// are not counted)
    pub synthesized: usize,
}

/// Reconciles the explicit log with merged activity intervals for past days.
#[derive(Clone)]
pub struct LogCorrector {
    log: Arc<dyn AttendanceLog>,
    activity: Arc<dyn ActivityStore>,
    config: AttendanceConfig,
}

impl LogCorrector {
    pub fn new(
        log: Arc<dyn AttendanceLog>,
        activity: Arc<dyn ActivityStore>,
        config: AttendanceConfig,
    ) -> Self {
        Self {
            log,
            activity,
            config,
        }
    }

    /// Correct one employee's log for one calendar day.
    ///
    /// A day with no qualifying activity is a no-op, never an error.
    pub async fn correct_day(
        &self,
        employee_id: Uuid,
        day: NaiveDate,
    ) -> Result<CorrectionReport> {
        let day_start = day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc();
        let day_end = day_start + Duration::days(1);
        let pad = self.config.activity_padding();

        // Fetch from one padding before midnight so a ping shortly before the
        // day still contributes its clipped in-day padding.
        let records = self
            .activity
            .records_between(
                employee_id,
                day_start - pad,
                day_end,
                &self.config.excluded_activity_sources,
            )
            .await?;
        let merged = merge_activity(&records, day, pad);
        if merged.is_empty() {
            return Ok(CorrectionReport::default());
        }

        let events = self.log.events_between(employee_id, day_start, day_end).await?;

        let epsilon = Duration::seconds(1);
        let mut current_status = Status::Leave;
        let mut cursor = 0usize;
        let mut synthesized = 0usize;

        for interval in &merged {
            // Consume every explicit event up to and including the interval
            // start, tracking whether one lands exactly on the boundary.
            let mut boundary_collision = false;
            while cursor < events.len() && events[cursor].time <= interval.start {
                boundary_collision = events[cursor].time == interval.start;
                current_status = events[cursor].status;
                cursor += 1;
            }

            // Open the interval when the tracked state is not a presence
            // state: COME after LEAVE, AWAKE after AWAY. The 1s shift keeps
            // (employee, time) unique when an explicit event sits exactly on
            // the boundary.
            if !current_status.is_present() {
                let opener = match current_status {
                    Status::Leave => Status::Come,
                    _ => Status::Awake,
                };
                let at = if boundary_collision {
                    interval.start + epsilon
                } else {
                    interval.start
                };
                synthesized += self.synthesize(employee_id, opener, at).await? as usize;
                current_status = opener;
            }

            // Consume explicit events through the interval end. A LEAVE or
            // AWAY strictly inside the interval closes the open period early
            // and is answered with the complementary re-open one second
            // later; one landing exactly on the end needs no re-open.
            while cursor < events.len() && events[cursor].time <= interval.end {
                let event = &events[cursor];
                cursor += 1;
                current_status = event.status;
                if !current_status.is_present() && event.time < interval.end {
                    let reopen = match current_status {
                        Status::Leave => Status::Come,
                        _ => Status::Awake,
                    };
                    synthesized += self
                        .synthesize(employee_id, reopen, event.time + epsilon)
                        .await? as usize;
                    current_status = reopen;
                }
            }
            // Still-open state is left for the next interval or the
            // end-of-day close below.
        }

        // End of day: a state still on shift after the last interval is
        // closed one second past the interval end.
        if current_status.is_on_shift() {
            let last_end = merged.last().expect("merged is non-empty").end;
            synthesized += self
                .synthesize(employee_id, Status::Leave, last_end + epsilon)
                .await? as usize;
        }

        tracing::debug!(
            employee = %employee_id,
            %day,
            intervals = merged.len(),
            synthesized,
            "corrected attendance log"
        );

        Ok(CorrectionReport {
            intervals: merged.len(),
            synthesized,
        })
    }

    async fn synthesize(
        &self,
        employee_id: Uuid,
        status: Status,
        time: DateTime<Utc>,
    ) -> Result<bool> {
        let inserted = self
            .log
            .insert_if_absent(AttendanceEvent::new(
                employee_id,
                status,
                time,
                CORRECTION_SOURCE,
            ))
            .await?;
        if !inserted {
            tracing::debug!(
                employee = %employee_id,
                %time,
                "synthesized event already present, skipped"
            );
        }
        Ok(inserted)
    }
}
