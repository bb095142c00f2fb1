use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Session not found";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, .. } => SessionError::NotFound(key),
            other => SessionError::Store(other),
        }
    }
}

/// Convert SessionError to AppError for standardized error responses
impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            SessionError::Validation(msg) => AppError::BadRequest(msg),
            SessionError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
