//! Storage plumbing for the workshop services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks and the
//!   MongoDB-backed [`document::DocumentStore`]
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `mock` - exports `MockDocumentStore` for downstream tests
//!
//! # Example
//!
//! ```ignore
//! use database::document::{DocumentStore, MongoDocumentStore};
//! use database::mongodb::{MongoConfig, connect};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "workshop");
//! let client = connect(&config).await?;
//! let db = client.database(config.database());
//! let speakers = MongoDocumentStore::<Speaker>::new(&db, "spring-2025");
//! let all = speakers.list().await?;
//! ```

// Always available modules
pub mod common;
pub mod document;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
pub use document::{Document, DocumentStore, MemoryDocumentStore, StoreError, StoreResult};

#[cfg(feature = "mongodb")]
pub use document::MongoDocumentStore;
