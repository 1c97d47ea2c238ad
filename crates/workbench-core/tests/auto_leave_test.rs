// Integration tests for the auto-leave safeguard

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;
use workbench_core::{
    AttendanceConfig, AttendanceEvent, AutoLeave, Employee, InMemoryAttendanceLog,
    InMemoryEmployeeDirectory, Status,
};

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, h, m, s).unwrap()
}

struct Setup {
    log: Arc<InMemoryAttendanceLog>,
    directory: Arc<InMemoryEmployeeDirectory>,
    auto_leave: AutoLeave,
    emp: Uuid,
}

async fn setup(last_login: Option<DateTime<Utc>>) -> Setup {
    let log = Arc::new(InMemoryAttendanceLog::new());
    let directory = Arc::new(InMemoryEmployeeDirectory::new());
    let emp = Uuid::now_v7();
    directory
        .seed(vec![Employee {
            id: emp,
            name: "Dana".into(),
            active: true,
            last_login_at: last_login,
        }])
        .await;
    let auto_leave = AutoLeave::new(log.clone(), directory.clone(), AttendanceConfig::default());
    Setup {
        log,
        directory,
        auto_leave,
        emp,
    }
}

#[tokio::test]
async fn stale_away_is_closed_one_second_after_last_signal() {
    // AWAY since 10:00, last login four hours earlier
    let s = setup(Some(at(6, 0, 0))).await;
    s.log
        .seed(vec![
            AttendanceEvent::new(s.emp, Status::Come, at(9, 0, 0), "tm"),
            AttendanceEvent::new(s.emp, Status::Away, at(10, 0, 0), "tm"),
        ])
        .await;

    // Four hours after the transition: both signals outside the 3h window
    let closed = s
        .auto_leave
        .sweep_employee_at(s.emp, at(14, 0, 0))
        .await
        .unwrap();
    assert!(closed);

    let last = s.log.all_events(s.emp).await.pop().unwrap();
    assert_eq!(last.status, Status::Leave);
    assert_eq!(last.time, at(10, 0, 1));
    assert_eq!(last.source, "auto");
}

#[tokio::test]
async fn recent_transition_keeps_status_open() {
    let s = setup(Some(at(6, 0, 0))).await;
    s.log
        .seed(vec![AttendanceEvent::new(
            s.emp,
            Status::Away,
            at(10, 0, 0),
            "tm",
        )])
        .await;

    // One hour later: transition is inside the window
    let closed = s
        .auto_leave
        .sweep_employee_at(s.emp, at(11, 0, 0))
        .await
        .unwrap();
    assert!(!closed);
    assert_eq!(s.log.all_events(s.emp).await.len(), 1);
}

#[tokio::test]
async fn recent_login_keeps_status_open() {
    // Old transition but a fresh login
    let s = setup(Some(at(13, 0, 0))).await;
    s.log
        .seed(vec![AttendanceEvent::new(
            s.emp,
            Status::Come,
            at(8, 0, 0),
            "tm",
        )])
        .await;

    let closed = s
        .auto_leave
        .sweep_employee_at(s.emp, at(14, 0, 0))
        .await
        .unwrap();
    assert!(!closed);
}

#[tokio::test]
async fn login_newer_than_transition_anchors_the_leave() {
    let s = setup(Some(at(11, 0, 0))).await;
    s.log
        .seed(vec![AttendanceEvent::new(
            s.emp,
            Status::Come,
            at(8, 0, 0),
            "tm",
        )])
        .await;

    let closed = s
        .auto_leave
        .sweep_employee_at(s.emp, at(15, 0, 0))
        .await
        .unwrap();
    assert!(closed);

    let last = s.log.all_events(s.emp).await.pop().unwrap();
    assert_eq!(last.time, at(11, 0, 1));
}

#[tokio::test]
async fn already_left_employee_is_skipped() {
    let s = setup(None).await;
    s.log
        .seed(vec![
            AttendanceEvent::new(s.emp, Status::Come, at(8, 0, 0), "tm"),
            AttendanceEvent::new(s.emp, Status::Leave, at(9, 0, 0), "tm"),
        ])
        .await;

    let closed = s
        .auto_leave
        .sweep_employee_at(s.emp, at(20, 0, 0))
        .await
        .unwrap();
    assert!(!closed);
    assert_eq!(s.log.all_events(s.emp).await.len(), 2);
}

#[tokio::test]
async fn sweep_is_idempotent_across_overlapping_runs() {
    let s = setup(None).await;
    s.log
        .seed(vec![AttendanceEvent::new(
            s.emp,
            Status::Away,
            at(10, 0, 0),
            "tm",
        )])
        .await;

    let now = at(10, 0, 0) + Duration::hours(4);
    assert!(s.auto_leave.sweep_employee_at(s.emp, now).await.unwrap());
    // A second overlapping run finds the employee already LEAVE
    assert!(!s.auto_leave.sweep_employee_at(s.emp, now).await.unwrap());
    assert_eq!(s.log.all_events(s.emp).await.len(), 2);
}

#[tokio::test]
async fn directory_lists_only_active_employees() {
    let s = setup(None).await;
    s.directory
        .seed(vec![Employee {
            id: Uuid::now_v7(),
            name: "Former".into(),
            active: false,
            last_login_at: None,
        }])
        .await;

    let active = s.auto_leave.directory().active_employees().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, s.emp);
}
