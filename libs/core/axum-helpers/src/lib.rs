//! # Axum Helpers
//!
//! Shared building blocks for the workshop HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: shared-secret gate for admin routes
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: `{"error": ...}` responses with logged error codes
//! - **[`extractors`]**: validated JSON bodies
//! - **[`envelope`]**: `{"message", "data"}` success bodies
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let server = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(
//!         Router::new(),
//!         Router::new(),
//!         &CorsConfig::default(),
//!         server.request_timeout,
//!     )?;
//!     create_production_app(router, &server, async {}).await
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{ADMIN_PASSWORD_HEADER, AdminGate, admin_auth_middleware};

pub use envelope::{DataResponse, MessageResponse};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;
