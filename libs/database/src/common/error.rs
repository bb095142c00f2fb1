/// Connection-level failures raised while bringing a backend up.
///
/// Request-path failures use [`crate::document::StoreError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for connection-level operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
