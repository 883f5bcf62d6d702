use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned whenever a sheet operation finds no usable credential.
pub const NO_CREDENTIAL_MESSAGE: &str = "No token file";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A required query parameter is missing or malformed. Reported as plain text.
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("No stored credential for identity")]
    NoCredential,
    #[error("Invalid request: {0}")]
    BadRequest(String),
    /// An upstream call failed; the upstream status and message are passed through.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },
    /// Server-side failure whose message is safe to return as plain text.
    #[error("{0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                error_json(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Self::Validation(msg) => {
                tracing::debug!(message = %msg, "Validation failed");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            Self::NoCredential => {
                tracing::debug!("No stored credential");
                error_json(StatusCode::BAD_REQUEST, NO_CREDENTIAL_MESSAGE)
            }
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                error_json(StatusCode::BAD_REQUEST, &msg)
            }
            Self::Upstream { status, message } => {
                tracing::warn!(status = %status.as_u16(), message = %message, "Upstream call failed");
                error_json(status, &message)
            }
            Self::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "Error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Validation("x".into()).into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NoCredential.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Internal("x".into()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Upstream { status: StatusCode::NOT_FOUND, message: "gone".into() }.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
