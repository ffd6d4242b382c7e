use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::infrastructure::db::{check_connection, DbPool};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
    pub database_latency_ms: Option<u64>,
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /health/ready - Readiness probe, fails when Postgres is unreachable
pub async fn health_ready(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let started = Instant::now();

    match check_connection(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_string(),
                database: "connected".to_string(),
                database_latency_ms: Some(started.elapsed().as_millis() as u64),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "not_ready".to_string(),
                    database: "disconnected".to_string(),
                    database_latency_ms: None,
                }),
            )
        }
    }
}
