use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Speaker not found";

#[derive(Debug, Error)]
pub enum SpeakerError {
    #[error("Speaker not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

pub type SpeakerResult<T> = Result<T, SpeakerError>;

impl From<StoreError> for SpeakerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, .. } => SpeakerError::NotFound(key),
            other => SpeakerError::Store(other),
        }
    }
}

/// Convert SpeakerError to AppError for standardized error responses
impl From<SpeakerError> for AppError {
    fn from(err: SpeakerError) -> Self {
        match err {
            SpeakerError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            SpeakerError::Validation(msg) => AppError::BadRequest(msg),
            SpeakerError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for SpeakerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
