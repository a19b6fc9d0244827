use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use bittencourt_contact::SubmitFormInput;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, routes::AppState};

pub const SUBMITTED: &str = "Mensagem enviada com sucesso!";

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ActionOutput {
    pub success: bool,
    pub message: &'static str,
    pub id: String,
}

/// POST /api/contact
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ActionInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;

    let id = app_state
        .contact_command
        .submit_form(SubmitFormInput {
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
        })
        .await?;

    tracing::info!(contact.id = %id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(ActionOutput {
            success: true,
            message: SUBMITTED,
            id,
        }),
    ))
}
