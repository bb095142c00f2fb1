use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError, StoreResult};

/// In-process [`DocumentStore`] for tests and local development.
///
/// Clones share the same underlying map. `list` returns documents ordered
/// by key.
#[derive(Debug)]
pub struct MemoryDocumentStore<T> {
    documents: Arc<RwLock<BTreeMap<String, T>>>,
}

impl<T: Document> MemoryDocumentStore<T> {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<T: Document> Default for MemoryDocumentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryDocumentStore<T> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for MemoryDocumentStore<T> {
    async fn get(&self, key: &str) -> StoreResult<T> {
        self.documents
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, key))
    }

    async fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn put(&self, key: &str, document: &T) -> StoreResult<()> {
        let mut stored = document.clone();
        stored.set_key(key);
        self.documents.write().await.insert(key.to_string(), stored);
        tracing::debug!(collection = T::COLLECTION, key, "Document stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}
