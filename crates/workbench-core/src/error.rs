// Error types for the attendance core

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for attendance operations
pub type Result<T> = std::result::Result<T, AttendanceError>;

/// Errors that can occur in the attendance core.
///
/// Business-rule rejections (same-status write, duplicate timestamp) are NOT
/// errors; they are reported through return values. These variants cover
/// storage faults and malformed input only.
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// Attendance log store error
    #[error("Attendance log error: {0}")]
    Log(String),

    /// Activity store error
    #[error("Activity store error: {0}")]
    Activity(String),

    /// Employee directory error
    #[error("Employee directory error: {0}")]
    Directory(String),

    /// Unknown employee
    #[error("Employee not found: {0}")]
    EmployeeNotFound(Uuid),

    /// Unparseable status value
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AttendanceError {
    /// Create an attendance log error
    pub fn log(msg: impl Into<String>) -> Self {
        AttendanceError::Log(msg.into())
    }

    /// Create an activity store error
    pub fn activity(msg: impl Into<String>) -> Self {
        AttendanceError::Activity(msg.into())
    }

    /// Create an employee directory error
    pub fn directory(msg: impl Into<String>) -> Self {
        AttendanceError::Directory(msg.into())
    }

    /// Create an invalid-status error
    pub fn invalid_status(value: impl Into<String>) -> Self {
        AttendanceError::InvalidStatus(value.into())
    }
}
