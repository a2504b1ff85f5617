use axum::extract::State;
use axum::{routing::get, Json, Router};
use coffeehub_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Deployment name from `APP_ENV`.
    pub environment: String,
    pub timestamp: Timestamp,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = coffeehub_db::health_check(&state.pool).await.is_ok();

    let (status, database) = if db_healthy {
        ("ok", "connected")
    } else {
        ("degraded", "disconnected")
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        database,
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
