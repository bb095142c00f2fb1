use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Attendee not found";

#[derive(Debug, Error)]
pub enum AttendeeError {
    #[error("Attendee not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

pub type AttendeeResult<T> = Result<T, AttendeeError>;

impl From<StoreError> for AttendeeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, .. } => AttendeeError::NotFound(key),
            other => AttendeeError::Store(other),
        }
    }
}

/// Convert AttendeeError to AppError for standardized error responses
impl From<AttendeeError> for AppError {
    fn from(err: AttendeeError) -> Self {
        match err {
            AttendeeError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            AttendeeError::Validation(msg) => AppError::BadRequest(msg),
            AttendeeError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for AttendeeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
