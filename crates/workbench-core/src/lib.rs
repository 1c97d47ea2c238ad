// Workbench attendance core
//
// This crate contains the status reconciliation logic shared by the API and
// the batch worker:
// - Status / AttendanceEvent / ActivityRecord domain types
// - merge_activity: pure interval-merge over passive activity records
// - StatusResolver: live status read + conditional status write
// - LogCorrector: retroactive per-day reconciliation of the explicit log
// - AutoLeave: stuck-present safeguard
//
// Storage is abstracted behind traits so production (Postgres) and tests
// (in-memory) share the same code paths.

pub mod auto_leave;
pub mod config;
pub mod corrector;
pub mod error;
pub mod event;
pub mod intervals;
pub mod memory;
pub mod resolver;
pub mod status;
pub mod traits;

pub use auto_leave::AutoLeave;
pub use config::AttendanceConfig;
pub use corrector::{CorrectionReport, LogCorrector};
pub use error::{AttendanceError, Result};
pub use event::{ActivityRecord, AttendanceEvent, Employee};
pub use intervals::{merge_activity, Interval};
pub use memory::{InMemoryActivityStore, InMemoryAttendanceLog, InMemoryEmployeeDirectory};
pub use resolver::{CurrentStatus, StatusChange, StatusResolver};
pub use status::Status;
pub use traits::{ActivityStore, AttendanceLog, EmployeeDirectory};
