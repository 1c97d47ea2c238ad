// Attendance DTOs for the public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use workbench_core::Status;

/// Live attendance status of one employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentStatusResponse {
    pub employee_id: Uuid,
    pub status: Status,
    /// Time of the last explicit transition; absent when the log is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

/// Request to record a status transition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: Status,
    /// Origin tag recorded with the event; defaults to "api"
    #[serde(default)]
    pub source: Option<String>,
    /// Explicit event time; defaults to now
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Result of a status transition attempt
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusChangeResponse {
    pub employee_id: Uuid,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub changed: bool,
}

/// Employee summary as listed by the directory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
}
