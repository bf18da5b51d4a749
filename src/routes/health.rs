use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::postgres::PgPool;

use crate::db;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: String,
    timestamp: i64,
}

// GET /health - Liveness plus a database round-trip
pub async fn health_check(State(pool): State<PgPool>) -> (StatusCode, Json<HealthResponse>) {
    let (status, state, database) = match db::ping(&pool).await {
        Ok(()) => (StatusCode::OK, "ok", "up"),
        Err(e) => {
            tracing::warn!("Health check could not reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    let response = HealthResponse {
        status: state.to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
