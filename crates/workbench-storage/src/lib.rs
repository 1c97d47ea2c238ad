// Postgres storage layer with sqlx
//
// This crate provides database implementations for the core traits:
// - DbAttendanceLog: implements AttendanceLog over the attendance_events table
// - DbActivityStore: implements ActivityStore over activity_records
// - DbEmployeeDirectory: implements EmployeeDirectory over employees

pub mod attendance_store;
pub mod models;
pub mod repositories;

pub use attendance_store::{DbActivityStore, DbAttendanceLog, DbEmployeeDirectory};
pub use models::*;
pub use repositories::Database;
