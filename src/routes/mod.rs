use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use sqlx::SqlitePool;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub contact_command: bittencourt_contact::Command,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: bittencourt_shared::State) -> Self {
        Self {
            pool: state.read_db.clone(),
            contact_command: bittencourt_contact::Command::new(state),
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "message": "Não encontrado"})),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
