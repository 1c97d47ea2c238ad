// Activity interval merging
//
// Pure function turning one employee-day of passive activity records into a
// minimal ordered list of non-overlapping busy intervals, clipped to the day.
// This feeds the retroactive log corrector and has no side effects.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::event::ActivityRecord;

/// A closed time interval of detected activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Merge one day of activity records into ordered, pairwise disjoint busy
/// intervals.
///
/// Records with a positive duration span `[time, time + duration]`; instant
/// pings (duration 0) are padded symmetrically to `[time - pad, time + pad]`.
/// Every interval is clipped to the day's boundaries; day boundaries are hard
/// stops, activity never implies presence outside the day under correction.
/// Overlapping or touching intervals are merged, so consecutive outputs
/// always have a positive gap between them. Empty input yields empty output.
pub fn merge_activity(records: &[ActivityRecord], day: NaiveDate, pad: Duration) -> Vec<Interval> {
    let day_start = day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc();
    let day_end = day_start + Duration::days(1);

    let mut intervals: Vec<Interval> = Vec::with_capacity(records.len());
    for record in records {
        let (raw_start, raw_end) = if record.duration_secs > 0 {
            (record.time, record.time + Duration::seconds(record.duration_secs))
        } else {
            (record.time - pad, record.time + pad)
        };
        let start = raw_start.max(day_start);
        let end = raw_end.min(day_end);
        // Entirely outside the day once clipped
        if start >= end {
            continue;
        }
        intervals.push(Interval::new(start, end));
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter();
    let Some(first) = iter.next() else {
        return merged;
    };

    let mut current = first;
    for next in iter {
        if next.start <= current.end {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        day().and_hms_opt(h, m, 0).unwrap().and_utc()
    }

    fn record(time: DateTime<Utc>, duration_secs: i64) -> ActivityRecord {
        ActivityRecord {
            employee_id: Uuid::nil(),
            source_id: "tracker".into(),
            action: "edit".into(),
            target_id: "doc-1".into(),
            time,
            duration_secs,
        }
    }

    fn pad() -> Duration {
        Duration::minutes(15)
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_activity(&[], day(), pad()).is_empty());
    }

    #[test]
    fn instant_ping_is_padded_symmetrically() {
        let merged = merge_activity(&[record(at(10, 0), 0)], day(), pad());
        assert_eq!(merged, vec![Interval::new(at(9, 45), at(10, 15))]);
    }

    #[test]
    fn positive_duration_spans_from_start() {
        let merged = merge_activity(&[record(at(9, 0), 3600)], day(), pad());
        assert_eq!(merged, vec![Interval::new(at(9, 0), at(10, 0))]);
    }

    #[test]
    fn overlapping_intervals_merge() {
        let merged = merge_activity(
            &[record(at(9, 0), 3600), record(at(9, 30), 3600)],
            day(),
            pad(),
        );
        assert_eq!(merged, vec![Interval::new(at(9, 0), at(10, 30))]);
    }

    #[test]
    fn touching_intervals_merge() {
        let merged = merge_activity(
            &[record(at(9, 0), 3600), record(at(10, 0), 3600)],
            day(),
            pad(),
        );
        assert_eq!(merged, vec![Interval::new(at(9, 0), at(11, 0))]);
    }

    #[test]
    fn disjoint_intervals_stay_separate_and_sorted() {
        let merged = merge_activity(
            &[record(at(14, 0), 600), record(at(9, 0), 600)],
            day(),
            pad(),
        );
        assert_eq!(
            merged,
            vec![
                Interval::new(at(9, 0), at(9, 10)),
                Interval::new(at(14, 0), at(14, 10)),
            ]
        );
        // Positive gap between consecutive outputs
        assert!(merged[0].end < merged[1].start);
    }

    #[test]
    fn clips_to_day_start() {
        // Starts 10 minutes before midnight, runs 20 minutes
        let start = at(0, 0) - Duration::minutes(10);
        let merged = merge_activity(&[record(start, 20 * 60)], day(), pad());
        assert_eq!(merged, vec![Interval::new(at(0, 0), at(0, 10))]);
    }

    #[test]
    fn clips_to_day_end() {
        let start = at(23, 55);
        let merged = merge_activity(&[record(start, 20 * 60)], day(), pad());
        assert_eq!(
            merged,
            vec![Interval::new(at(23, 55), at(0, 0) + Duration::days(1))]
        );
    }

    #[test]
    fn drops_records_entirely_outside_the_day() {
        let merged = merge_activity(
            &[record(at(0, 0) - Duration::hours(2), 600)],
            day(),
            pad(),
        );
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_is_idempotent() {
        let records = [
            record(at(9, 0), 3600),
            record(at(9, 30), 0),
            record(at(13, 0), 0),
            record(at(22, 0), 1800),
        ];
        let merged = merge_activity(&records, day(), pad());
        // Feed each merged interval back in as a duration record
        let again: Vec<ActivityRecord> = merged
            .iter()
            .map(|iv| record(iv.start, (iv.end - iv.start).num_seconds()))
            .collect();
        assert_eq!(merge_activity(&again, day(), pad()), merged);
    }

    #[test]
    fn union_is_preserved() {
        let records = [record(at(9, 0), 3600), record(at(9, 45), 0)];
        let merged = merge_activity(&records, day(), pad());
        // [09:00,10:00] and padded [09:30,10:00] collapse into one span
        assert_eq!(merged, vec![Interval::new(at(9, 0), at(10, 0))]);
    }
}
