use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// Header carrying the admin secret.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

pub const NOT_CONFIGURED: &str = "Admin password not configured";
pub const INVALID_PASSWORD: &str = "Invalid admin password";

type SecretDigest = [u8; 32];

/// Checks the admin secret on incoming requests.
///
/// Only the SHA-256 digest of the configured secret is held, so neither
/// `Debug` output nor a heap dump exposes it. Comparing digests also makes
/// both operands the same length, which keeps the comparison independent of
/// where the first differing byte sits.
#[derive(Clone)]
pub struct AdminGate {
    expected: Option<SecretDigest>,
}

impl AdminGate {
    /// A `None` or blank secret leaves the gate closed to everyone.
    pub fn new(secret: Option<String>) -> Self {
        let expected = secret
            .filter(|s| !s.is_empty())
            .map(|s| digest(s.as_bytes()));
        Self { expected }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Decides whether `provided` grants admin access.
    ///
    /// An unconfigured gate is a server fault and is reported before the
    /// header is looked at.
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AppError> {
        let Some(expected) = &self.expected else {
            tracing::error!("admin route hit but no admin password is configured");
            return Err(AppError::ServerMisconfigured(NOT_CONFIGURED.to_string()));
        };

        let provided = digest(provided.unwrap_or_default().as_bytes());
        if constant_time_eq(expected, &provided) {
            Ok(())
        } else {
            tracing::warn!("rejected admin request with invalid password");
            Err(AppError::Unauthorized(INVALID_PASSWORD.to_string()))
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn digest(bytes: &[u8]) -> SecretDigest {
    Sha256::digest(bytes).into()
}

fn constant_time_eq(a: &SecretDigest, b: &SecretDigest) -> bool {
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Admin gate middleware.
///
/// Runs before the handler; a rejected request never reaches the store.
///
/// ```ignore
/// let admin = Router::new()
///     .route("/attendees", get(list_attendees))
///     .layer(axum::middleware::from_fn_with_state(gate, admin_auth_middleware));
/// ```
pub async fn admin_auth_middleware(
    State(gate): State<AdminGate>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok());

    gate.authorize(provided)?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn gated(gate: AdminGate) -> Router {
        Router::new()
            .route("/secret", get(|| async { "granted" }))
            .layer(middleware::from_fn_with_state(gate, admin_auth_middleware))
    }

    async fn call(app: Router, password: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = HttpRequest::get("/secret");
        if let Some(password) = password {
            request = request.header("X-Admin-Password", password);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn error_of(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorResponse>(body).unwrap().error
    }

    #[test]
    fn authorize_accepts_exact_secret_only() {
        let gate = AdminGate::new(Some("hunter2".into()));
        assert!(gate.authorize(Some("hunter2")).is_ok());
        assert!(gate.authorize(Some("hunter3")).is_err());
        assert!(gate.authorize(Some("hunter2 ")).is_err());
        assert!(gate.authorize(Some("")).is_err());
        assert!(gate.authorize(None).is_err());
    }

    #[test]
    fn blank_secret_counts_as_unconfigured() {
        assert!(!AdminGate::new(Some(String::new())).is_configured());
        assert!(!AdminGate::new(None).is_configured());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let rendered = format!("{:?}", AdminGate::new(Some("hunter2".into())));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("configured: true"));
    }

    #[tokio::test]
    async fn passes_request_with_correct_header() {
        let (status, body) = call(gated(AdminGate::new(Some("s3cret".into()))), Some("s3cret")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"granted");
    }

    #[tokio::test]
    async fn rejects_wrong_header_with_401() {
        let (status, body) = call(gated(AdminGate::new(Some("s3cret".into()))), Some("guess")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_of(&body), INVALID_PASSWORD);
    }

    #[tokio::test]
    async fn rejects_missing_header_with_401() {
        let (status, body) = call(gated(AdminGate::new(Some("s3cret".into()))), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_of(&body), INVALID_PASSWORD);
    }

    #[tokio::test]
    async fn unconfigured_gate_answers_500_even_with_header() {
        let (status, body) = call(gated(AdminGate::new(None)), Some("anything")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_of(&body), NOT_CONFIGURED);
    }
}
