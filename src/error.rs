use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Sync failed: {0}")]
    Sync(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("A sync is already in progress")]
    SyncInProgress,

    #[error("The events to sync changed since they were previewed")]
    PlanChanged,

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::SyncInProgress => (
                StatusCode::CONFLICT,
                "A sync is already in progress".to_string(),
            ),
            AppError::PlanChanged => (
                StatusCode::CONFLICT,
                "The events to sync changed since they were previewed".to_string(),
            ),
            AppError::Extraction(e) => {
                error!("extraction error: {}", e);
                (StatusCode::BAD_GATEWAY, "Failed to extract document".to_string())
            }
            AppError::Sync(e) => {
                error!("sync error: {}", e);
                (StatusCode::BAD_GATEWAY, "Failed to sync.".to_string())
            }
            AppError::Config(e) => {
                error!("configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
