pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// { "error": "Attendee not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side variants carry the message the client sees; the underlying
/// cause is logged by whoever constructs them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Server misconfigured: {0}")]
    ServerMisconfigured(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServerMisconfigured(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::ServerMisconfigured(_) => ErrorCode::ServerMisconfigured,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// The message placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            // Missing fields and type mismatches land here too; the client
            // sees serde's description rather than axum's 422.
            AppError::JsonExtractorRejection(e) => e.body_text(),
            AppError::ValidationError(e) => describe_validation_errors(e),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::ServerMisconfigured(msg)
            | AppError::InternalServerError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();
        let message = self.client_message();

        if code.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                error_kind = code.as_str(),
                "{}",
                message
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                error_kind = code.as_str(),
                "{}",
                message
            );
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Flattens validator output into one line, fields in alphabetical order.
///
/// Each failure uses its custom message when the model supplies one and
/// falls back to `<field> is invalid (<rule>)` otherwise.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| match &failure.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field} is invalid ({})", failure.code),
            })
        })
        .collect();

    if parts.is_empty() {
        "Request validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(email(message = "must be a valid email address"))]
        email: String,
        #[validate(length(min = 2))]
        designation: String,
    }

    async fn body_of(error: AppError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn validation_messages_are_sorted_by_field() {
        let signup = Signup {
            name: String::new(),
            email: "nope".into(),
            designation: "x".into(),
        };
        let errors = signup.validate().unwrap_err();

        assert_eq!(
            describe_validation_errors(&errors),
            "designation is invalid (length); email: must be a valid email address; name: must not be empty"
        );
    }

    #[tokio::test]
    async fn not_found_renders_error_body() {
        let (status, body) = body_of(AppError::NotFound("Speaker not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Speaker not found");
    }

    #[tokio::test]
    async fn misconfiguration_is_a_server_error() {
        let (status, body) = body_of(AppError::ServerMisconfigured(
            "Admin password not configured".into(),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Admin password not configured");
    }

    #[tokio::test]
    async fn validation_failure_is_bad_request() {
        let signup = Signup {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            designation: String::new(),
        };
        let error = AppError::from(signup.validate().unwrap_err());
        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.starts_with("designation"));
    }

    #[test]
    fn status_and_code_line_up() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (
                AppError::InternalServerError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status);
            assert_eq!(error.error_code().is_server_error(), status.is_server_error());
        }
    }
}
