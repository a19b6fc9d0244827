use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bittencourt_contact::Query;
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// GET /ready
///
/// Ready once the read pool can count stored submissions, which also fails
/// when the `contact_message` table has not been migrated yet.
pub async fn ready(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match Query(pool).count().await {
        Ok(submissions) => {
            tracing::debug!(submissions, "readiness check passed");
            (StatusCode::OK, Json(json!({"status": "ready"})))
        }
        Err(err) => {
            tracing::error!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not_ready", "reason": "database_unavailable"})),
            )
        }
    }
}
