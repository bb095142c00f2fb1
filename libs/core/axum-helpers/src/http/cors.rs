use crate::auth::ADMIN_PASSWORD_HEADER;
use axum::http::{HeaderName, HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer for the configured browser origins.
///
/// The admin header is on the allow list so the dashboard can send it from
/// the browser. Fails if an origin is not a valid header value, or is `*`:
/// credentials are allowed, and browsers refuse a wildcard origin with them.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    if config.allowed_origins.iter().any(|origin| origin.trim() == "*") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ORIGIN cannot contain '*' while credentials are allowed; list explicit origins",
        ));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ORIGIN value: {e}"),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ORIGIN cannot be empty",
        ));
    }

    tracing::info!(origins = ?config.allowed_origins, "CORS configured");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static(ADMIN_PASSWORD_HEADER),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_origin() {
        assert!(create_cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_origin_list() {
        let config = CorsConfig {
            allowed_origins: Vec::new(),
        };
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_unparseable_origin() {
        let config = CorsConfig::new(["http://ok.example", "bad\norigin"]);
        assert!(create_cors_layer(&config).is_err());
    }

    #[test]
    fn rejects_wildcard_origin() {
        let config = CorsConfig::new(["http://ok.example", "*"]);
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
