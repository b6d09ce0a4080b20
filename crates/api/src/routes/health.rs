use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Payload for the root welcome endpoint.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Database-only health payload.
#[derive(Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
}

/// GET / -- welcome message.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Todo API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = todo_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /health/db -- 200 when the database answers, 503 otherwise.
async fn db_health_check(State(state): State<AppState>) -> AppResult<Json<DbHealthResponse>> {
    todo_db::health_check(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "Database health check failed");
        AppError::ServiceUnavailable("Database connection is unhealthy".to_string())
    })?;
    Ok(Json(DbHealthResponse { status: "ok" }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/health/db", get(db_health_check))
}
