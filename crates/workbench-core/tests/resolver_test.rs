// Integration tests for the current-status resolver
//
// These run against the in-memory attendance log, which implements the same
// AttendanceLog trait as the Postgres store.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;
use workbench_core::{
    AttendanceEvent, AttendanceLog, InMemoryAttendanceLog, Status, StatusResolver,
};

fn employee() -> Uuid {
    Uuid::now_v7()
}

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, h, m, s).unwrap()
}

#[tokio::test]
async fn empty_log_defaults_to_leave_with_no_timestamp() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let resolver = StatusResolver::new(log);

    let current = resolver.current_status(employee()).await.unwrap();
    assert_eq!(current.status, Status::Leave);
    assert_eq!(current.since, None);
}

#[tokio::test]
async fn set_status_appends_and_read_reflects_it() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let resolver = StatusResolver::new(log.clone());
    let emp = employee();

    let change = resolver
        .set_status(emp, Status::Come, "tm", Some(at(9, 0, 0)))
        .await
        .unwrap();
    assert!(change.changed);
    assert_eq!(change.status, Status::Come);
    assert_eq!(change.time, Some(at(9, 0, 0)));

    let current = resolver.current_status(emp).await.unwrap();
    assert_eq!(current.status, Status::Come);
    assert_eq!(current.since, Some(at(9, 0, 0)));
}

#[tokio::test]
async fn read_follows_most_recent_event() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let resolver = StatusResolver::new(log.clone());
    let emp = employee();

    log.seed(vec![
        AttendanceEvent::new(emp, Status::Come, at(9, 0, 0), "tm"),
        AttendanceEvent::new(emp, Status::Away, at(12, 0, 0), "tm"),
        AttendanceEvent::new(emp, Status::Awake, at(12, 30, 0), "tm"),
    ])
    .await;

    let current = resolver.current_status(emp).await.unwrap();
    assert_eq!(current.status, Status::Awake);
    assert_eq!(current.since, Some(at(12, 30, 0)));
}

#[tokio::test]
async fn same_status_write_is_rejected_not_an_error() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let resolver = StatusResolver::new(log.clone());
    let emp = employee();

    resolver
        .set_status(emp, Status::Come, "tm", Some(at(9, 0, 0)))
        .await
        .unwrap();

    let change = resolver
        .set_status(emp, Status::Come, "tm", Some(at(10, 0, 0)))
        .await
        .unwrap();
    assert!(!change.changed);
    // Prior transition is reported back unchanged
    assert_eq!(change.status, Status::Come);
    assert_eq!(change.time, Some(at(9, 0, 0)));

    assert_eq!(log.all_events(emp).await.len(), 1);
}

#[tokio::test]
async fn duplicate_timestamp_insert_is_silently_absorbed() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let emp = employee();

    let first = log
        .insert_if_absent(AttendanceEvent::new(emp, Status::Come, at(9, 0, 0), "tm"))
        .await
        .unwrap();
    let second = log
        .insert_if_absent(AttendanceEvent::new(emp, Status::Come, at(9, 0, 0), "tm"))
        .await
        .unwrap();

    assert!(first);
    assert!(!second);
    assert_eq!(log.all_events(emp).await.len(), 1);
}

#[tokio::test]
async fn accepted_write_on_colliding_timestamp_is_still_reported_changed() {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let resolver = StatusResolver::new(log.clone());
    let emp = employee();

    resolver
        .set_status(emp, Status::Come, "tm", Some(at(9, 0, 0)))
        .await
        .unwrap();
    // Different status, same second: legal transition, duplicate key skipped
    let change = resolver
        .set_status(emp, Status::Away, "tm", Some(at(9, 0, 0)))
        .await
        .unwrap();

    assert!(change.changed);
    assert_eq!(log.all_events(emp).await.len(), 1);
}
