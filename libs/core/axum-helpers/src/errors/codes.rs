//! Numeric error codes attached to log lines.
//!
//! Clients only ever see `{"error": message}`; the codes exist so that log
//! searches and alerts can group failures without parsing messages.

/// Error categories emitted by [`AppError`](super::AppError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000s)
    BadRequest,
    ValidationError,
    InvalidJson,
    NotFound,
    Unauthorized,

    // Server errors (5000s)
    InternalError,
    ServerMisconfigured,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier used as a structured log field.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServerMisconfigured => "SERVER_MISCONFIGURED",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::ValidationError => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::Unauthorized => 1006,
            Self::InternalError => 5000,
            Self::ServerMisconfigured => 5001,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.code() >= 5000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
