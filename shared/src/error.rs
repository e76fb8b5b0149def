use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    EntityNotAvailable(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("storage operation failed")]
    StorageError(#[source] sqlx::Error),
    #[error("unexpected error happened")]
    UnexpectedError(#[source] anyhow::Error),
}

/// Stable wire format for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, code) = match &self {
            AppError::EntityNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::EntityNotAvailable(_) => (StatusCode::BAD_REQUEST, "NOT_AVAILABLE"),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            AppError::ConvertToUuidError(_) => (StatusCode::BAD_REQUEST, "INVALID_ID"),
            AppError::StorageError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        }

        // Clients get the stable code plus a message; internal detail stays
        // in the log.
        let message = if status_code.is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorResponse { code, message })).into_response()
    }
}
