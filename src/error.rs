use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bittencourt_shared::Violations;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_DATA: &str = "Dados inválidos";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(Violations),

    #[error("Internal server error")]
    InternalError(anyhow::Error),
}

impl From<bittencourt_shared::Error> for AppError {
    fn from(err: bittencourt_shared::Error) -> Self {
        match err {
            bittencourt_shared::Error::Validate(violations) => AppError::ValidationError(violations),
            bittencourt_shared::Error::Unknown(e) => AppError::InternalError(e),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Violations>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, errors) = match self {
            AppError::InvalidBody(rejection) => {
                tracing::debug!("Rejected contact body: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    Some(Violations::new(
                        "body",
                        "invalid_json",
                        rejection.body_text(),
                    )),
                )
            }
            AppError::ValidationError(violations) => (StatusCode::BAD_REQUEST, Some(violations)),
            AppError::InternalError(e) => {
                // Storage details stay in the logs
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = if errors.is_some() {
            INVALID_DATA
        } else {
            INTERNAL_ERROR
        };

        (
            status_code,
            Json(ErrorBody {
                success: false,
                message,
                errors,
            }),
        )
            .into_response()
    }
}
