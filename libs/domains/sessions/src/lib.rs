//! Sessions Domain
//!
//! Workshop sessions and the read-side join that attaches speaker profiles
//! to each session.
//!
//! # Architecture
//!
//! ```text
//! Handlers     → public read routes, admin CRUD routes
//! Service      → validation, id assignment, full-document overwrite
//! Aggregation  → sessions × speakers join (dangling ids dropped)
//! Stores       → DocumentStore<Session> + DocumentStore<Speaker>
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryDocumentStore;
//! use domain_sessions::{SessionService, handlers};
//!
//! let service = SessionService::new(MemoryDocumentStore::new(), MemoryDocumentStore::new());
//! let public = handlers::public_router(service.clone());
//! let admin = handlers::admin_router(service);
//! ```

pub mod aggregation;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use aggregation::join_speakers;
pub use error::{SessionError, SessionResult};
pub use handlers::{AdminApiDoc, ApiDoc};
pub use models::{Session, SessionInput, SessionWithSpeakers};
pub use service::SessionService;
