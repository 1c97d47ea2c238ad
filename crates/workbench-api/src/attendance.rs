// Attendance HTTP routes
//
// The write path maps a rejected transition (status already current) to
// 409 CONFLICT, per the resolver's non-success contract. Storage faults are
// 500; unknown employees are 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;
use workbench_contracts::{
    CurrentStatusResponse, EmployeeSummary, ListResponse, SetStatusRequest, StatusChangeResponse,
};
use workbench_storage::Database;

use crate::services::AttendanceService;

/// Default origin tag for events written through the public API
const API_SOURCE: &str = "api";

/// App state for attendance routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AttendanceService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(AttendanceService::new(db)),
        }
    }
}

/// Create attendance routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/employees", get(list_employees))
        .route(
            "/v1/employees/:employee_id/status",
            get(get_status).put(set_status),
        )
        .with_state(state)
}

/// GET /v1/employees - Active employees
#[utoipa::path(
    get,
    path = "/v1/employees",
    responses(
        (status = 200, description = "Active employees", body = ListResponse<EmployeeSummary>),
        (status = 500, description = "Internal server error")
    ),
    tag = "attendance"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EmployeeSummary>>, StatusCode> {
    let employees = state.service.list_employees().await.map_err(|e| {
        tracing::error!("Failed to list employees: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let data = employees
        .into_iter()
        .map(|e| EmployeeSummary {
            id: e.id,
            name: e.name,
            active: e.active,
        })
        .collect();
    Ok(Json(ListResponse::new(data)))
}

/// GET /v1/employees/{employee_id}/status - Current attendance status
#[utoipa::path(
    get,
    path = "/v1/employees/{employee_id}/status",
    params(
        ("employee_id" = Uuid, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Current status", body = CurrentStatusResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "attendance"
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<CurrentStatusResponse>, StatusCode> {
    let current = state
        .service
        .current_status(employee_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read status: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(CurrentStatusResponse {
        employee_id,
        status: current.status,
        since: current.since,
    }))
}

/// PUT /v1/employees/{employee_id}/status - Record a status transition
#[utoipa::path(
    put,
    path = "/v1/employees/{employee_id}/status",
    params(
        ("employee_id" = Uuid, Path, description = "Employee id")
    ),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Transition recorded", body = StatusChangeResponse),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Status already current", body = StatusChangeResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "attendance"
)]
pub async fn set_status(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(req): Json<SetStatusRequest>,
) -> Result<(StatusCode, Json<StatusChangeResponse>), StatusCode> {
    let source = req.source.as_deref().unwrap_or(API_SOURCE);
    let change = state
        .service
        .set_status(employee_id, req.status, source, req.at)
        .await
        .map_err(|e| {
            tracing::error!("Failed to set status: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    let code = if change.changed {
        StatusCode::OK
    } else {
        StatusCode::CONFLICT
    };
    Ok((
        code,
        Json(StatusChangeResponse {
            employee_id,
            status: change.status,
            time: change.time,
            changed: change.changed,
        }),
    ))
}
