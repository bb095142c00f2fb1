use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Bson, doc},
};
use std::marker::PhantomData;
use tracing::instrument;

use super::{Document, DocumentStore, StoreError, StoreResult};

const KEY_FIELD: &str = "_id";
const ID_FIELD: &str = "id";

/// MongoDB-backed [`DocumentStore`].
///
/// Collections are namespaced per workspace as
/// `workshop.<workspace>.<collection>`, so several events can share one
/// database. The entity `id` is never persisted; the key lives in `_id` and
/// is copied back into `id` on read.
pub struct MongoDocumentStore<T> {
    collection: Collection<bson::Document>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Document> MongoDocumentStore<T> {
    pub fn new(db: &Database, workspace: &str) -> Self {
        Self {
            collection: db.collection(&Self::collection_name(workspace)),
            _entity: PhantomData,
        }
    }

    /// Fully qualified collection name for `workspace`
    pub fn collection_name(workspace: &str) -> String {
        format!("workshop.{}.{}", workspace, T::COLLECTION)
    }

    fn encode(key: &str, document: &T) -> StoreResult<bson::Document> {
        let mut encoded =
            bson::to_document(document).map_err(|e| StoreError::Serialization(e.to_string()))?;
        encoded.remove(ID_FIELD);
        encoded.insert(KEY_FIELD, key);
        Ok(encoded)
    }

    fn decode(mut raw: bson::Document) -> StoreResult<T> {
        let key = match raw.remove(KEY_FIELD) {
            Some(Bson::String(key)) => key,
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(other) => other.to_string(),
            None => {
                return Err(StoreError::Serialization(format!(
                    "document in '{}' has no {KEY_FIELD}",
                    T::COLLECTION
                )));
            }
        };
        raw.insert(ID_FIELD, key);
        bson::from_document(raw).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl<T> Clone for MongoDocumentStore<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _entity: PhantomData,
        }
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl<T: Document> DocumentStore<T> for MongoDocumentStore<T> {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn get(&self, key: &str) -> StoreResult<T> {
        let raw = self
            .collection
            .find_one(doc! { "_id": key })
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, key))?;
        Self::decode(raw)
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn list(&self) -> StoreResult<Vec<T>> {
        let mut cursor = self.collection.find(doc! {}).await.map_err(backend)?;
        let mut documents = Vec::new();

        while let Some(raw) = cursor.try_next().await.map_err(backend)? {
            match Self::decode(raw) {
                Ok(document) => documents.push(document),
                Err(e) => tracing::warn!(error = %e, "Skipping undecodable document"),
            }
        }

        Ok(documents)
    }

    #[instrument(skip(self, document), fields(collection = %self.collection.name()))]
    async fn put(&self, key: &str, document: &T) -> StoreResult<()> {
        let encoded = Self::encode(key, document)?;
        self.collection
            .replace_one(doc! { "_id": key }, encoded)
            .upsert(true)
            .await
            .map_err(backend)?;

        tracing::info!(key, "Document stored");
        Ok(())
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn delete(&self, key: &str) -> StoreResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": key })
            .await
            .map_err(backend)?;

        tracing::info!(key, deleted = result.deleted_count, "Document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Talk {
        id: String,
        title: String,
        speaker_ids: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        capacity: Option<u32>,
    }

    impl Document for Talk {
        const COLLECTION: &'static str = "talks";

        fn set_key(&mut self, key: &str) {
            self.id = key.to_string();
        }
    }

    fn talk() -> Talk {
        Talk {
            id: "from-body".to_string(),
            title: "Ownership".to_string(),
            speaker_ids: vec!["a".to_string()],
            capacity: None,
        }
    }

    #[test]
    fn test_collection_name_is_namespaced() {
        assert_eq!(
            MongoDocumentStore::<Talk>::collection_name("rustconf"),
            "workshop.rustconf.talks"
        );
    }

    #[test]
    fn test_encode_moves_key_into_underscore_id() {
        let encoded = MongoDocumentStore::<Talk>::encode("k1", &talk()).unwrap();
        assert_eq!(encoded.get_str("_id").unwrap(), "k1");
        assert!(!encoded.contains_key("id"));
        assert!(!encoded.contains_key("capacity"));
        assert_eq!(encoded.get_str("title").unwrap(), "Ownership");
    }

    #[test]
    fn test_decode_restores_id_from_key() {
        let raw = doc! {
            "_id": "k1",
            "id": "stale",
            "title": "Ownership",
            "speakerIds": ["a", "b"],
            "capacity": 40,
        };
        let decoded = MongoDocumentStore::<Talk>::decode(raw).unwrap();
        assert_eq!(decoded.id, "k1");
        assert_eq!(decoded.speaker_ids, vec!["a", "b"]);
        assert_eq!(decoded.capacity, Some(40));
    }

    #[test]
    fn test_decode_without_key_fails() {
        let raw = doc! { "title": "Orphan", "speakerIds": [] };
        let err = MongoDocumentStore::<Talk>::decode(raw).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
