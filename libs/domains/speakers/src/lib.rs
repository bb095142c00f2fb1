//! Speakers Domain
//!
//! Speaker profiles. Anyone may read them; only admins write.
//!
//! # Architecture
//!
//! ```text
//! Handlers  → public read routes, admin CRUD routes
//! Service   → validation, id assignment, full-document overwrite
//! Store     → database::DocumentStore<Speaker>
//! Models    → Speaker, SpeakerInput
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryDocumentStore;
//! use domain_speakers::{SpeakerService, handlers};
//!
//! let service = SpeakerService::new(MemoryDocumentStore::new());
//! let public = handlers::public_router(service.clone());
//! let admin = handlers::admin_router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{SpeakerError, SpeakerResult};
pub use handlers::{AdminApiDoc, ApiDoc};
pub use models::{Speaker, SpeakerInput};
pub use service::SpeakerService;
