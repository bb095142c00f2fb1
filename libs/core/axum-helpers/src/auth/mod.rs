//! Authorization for the admin surface.
//!
//! The workshop API has a single privileged role. Callers prove it by sending
//! the shared secret in the `X-Admin-Password` header.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{AdminGate, admin_auth_middleware};
//!
//! let gate = AdminGate::new(config.admin_password.clone());
//!
//! let admin = Router::new()
//!     .route("/speakers", post(create_speaker))
//!     .layer(axum::middleware::from_fn_with_state(gate, admin_auth_middleware));
//! ```

pub mod admin;

pub use admin::{ADMIN_PASSWORD_HEADER, AdminGate, admin_auth_middleware};
