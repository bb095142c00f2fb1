//! Key-addressed document storage.
//!
//! A [`DocumentStore`] is a handle on one collection of one entity type.
//! It offers exactly four operations: point read, full scan, create-or-replace
//! and idempotent delete. There are no partial updates, no transactions and
//! no pagination; collections are expected to be small enough to scan.
//!
//! The document key is authoritative for identity: whatever `id` a caller
//! puts into an entity, the store hands it back with the key it was filed
//! under.

mod memory;
#[cfg(feature = "mongodb")]
mod mongo;

pub use memory::MemoryDocumentStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoDocumentStore;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// An entity that lives in a named collection under a string key.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name, e.g. `"attendees"`
    const COLLECTION: &'static str;

    /// Overwrite the entity's identifier with its storage key
    fn set_key(&mut self, key: &str);
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document '{key}' not found in '{collection}'")]
    NotFound { collection: String, key: String },

    #[error("Store error: {0}")]
    Backend(String),

    #[error("Document encoding error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn not_found(collection: &str, key: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One typed collection in a document database.
///
/// Every method is a single awaited round-trip; dropping the returned future
/// abandons the call.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Fetch one document, failing with [`StoreError::NotFound`] if absent
    async fn get(&self, key: &str) -> StoreResult<T>;

    /// Every document in the collection, in no particular order
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Create or fully replace the document at `key`
    async fn put(&self, key: &str, document: &T) -> StoreResult<()>;

    /// Remove the document at `key`; succeeds when nothing is there
    async fn delete(&self, key: &str) -> StoreResult<()>;
}

/// Shared handles are stores too, so a backend picked at runtime can be
/// passed around as `Arc<dyn DocumentStore<T>>`.
#[async_trait]
impl<T, S> DocumentStore<T> for Arc<S>
where
    T: Document,
    S: DocumentStore<T> + ?Sized,
{
    async fn get(&self, key: &str) -> StoreResult<T> {
        (**self).get(key).await
    }

    async fn list(&self) -> StoreResult<Vec<T>> {
        (**self).list().await
    }

    async fn put(&self, key: &str, document: &T) -> StoreResult<()> {
        (**self).put(key, document).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key).await
    }
}
