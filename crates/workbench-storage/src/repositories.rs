// Repository layer for database operations
//
// Narrow methods only: insert-if-absent and range queries. The corrector and
// resolver never navigate relationships or hold a session across calls.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Attendance events
    // ============================================

    /// Insert an event unless (employee_id, time) is already present.
    /// Returns true when a row was written. Duplicate keys are absorbed by
    /// ON CONFLICT so overlapping batch runs and API writes never conflict.
    pub async fn insert_attendance_event(&self, event: CreateAttendanceEvent) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendance_events (employee_id, status, time, source)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (employee_id, time) DO NOTHING
            "#,
        )
        .bind(event.employee_id)
        .bind(&event.status)
        .bind(event.time)
        .bind(&event.source)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn last_attendance_event(
        &self,
        employee_id: Uuid,
    ) -> Result<Option<AttendanceEventRow>> {
        let row = sqlx::query_as::<_, AttendanceEventRow>(
            r#"
            SELECT employee_id, status, time, source
            FROM attendance_events
            WHERE employee_id = $1
            ORDER BY time DESC
            LIMIT 1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn attendance_events_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AttendanceEventRow>> {
        let rows = sqlx::query_as::<_, AttendanceEventRow>(
            r#"
            SELECT employee_id, status, time, source
            FROM attendance_events
            WHERE employee_id = $1 AND time >= $2 AND time < $3
            ORDER BY time ASC
            "#,
        )
        .bind(employee_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Activity records
    // ============================================

    pub async fn activity_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluded_sources: &[String],
    ) -> Result<Vec<ActivityRecordRow>> {
        let rows = sqlx::query_as::<_, ActivityRecordRow>(
            r#"
            SELECT employee_id, source_id, action, target_id, time, duration_secs
            FROM activity_records
            WHERE employee_id = $1 AND time >= $2 AND time < $3
              AND source_id <> ALL($4)
            ORDER BY time ASC
            "#,
        )
        .bind(employee_id)
        .bind(from)
        .bind(to)
        .bind(excluded_sources)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Employees
    // ============================================

    pub async fn list_active_employees(&self) -> Result<Vec<EmployeeRow>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, active, last_login_at
            FROM employees
            WHERE active = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_employee(&self, id: Uuid) -> Result<Option<EmployeeRow>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, active, last_login_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

/// Insert payload for the attendance log (status pre-rendered to text)
#[derive(Debug, Clone)]
pub struct CreateAttendanceEvent {
    pub employee_id: Uuid,
    pub status: String,
    pub time: DateTime<Utc>,
    pub source: String,
}
