// Workbench attendance API server
// Exposes the current-status resolver over HTTP plus the legacy TM bridge.

mod attendance;
mod bridge;
mod services;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use workbench_contracts::{
    CurrentStatusResponse, EmployeeSummary, ListResponse, SetStatusRequest, StatusChangeResponse,
};
use workbench_core::Status;
use workbench_storage::Database;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        attendance::list_employees,
        attendance::get_status,
        attendance::set_status,
    ),
    components(schemas(
        Status,
        CurrentStatusResponse,
        SetStatusRequest,
        StatusChangeResponse,
        EmployeeSummary,
        ListResponse<EmployeeSummary>,
    )),
    tags(
        (name = "attendance", description = "Attendance status endpoints")
    ),
    info(
        title = "Workbench Attendance API",
        version = "0.3.0",
        description = "Employee attendance status read/write and legacy TM bridge",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workbench_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("workbench-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let db = Arc::new(db);
    let attendance_state = attendance::AppState::new(db.clone());

    let app = Router::new()
        .route("/health", get(health))
        .merge(attendance::routes(attendance_state.clone()))
        .merge(bridge::routes(attendance_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".into());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!(%addr, "workbench-api listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
