//! Speaker Service - Business logic layer

use axum_helpers::errors::describe_validation_errors;
use database::DocumentStore;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::{SpeakerError, SpeakerResult};
use crate::models::{Speaker, SpeakerInput};

/// Speaker service providing CRUD operations over the speaker collection.
pub struct SpeakerService<S: DocumentStore<Speaker>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Speaker>> SpeakerService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    fn validate(input: &SpeakerInput) -> SpeakerResult<()> {
        input
            .validate()
            .map_err(|e| SpeakerError::Validation(describe_validation_errors(&e)))
    }

    #[instrument(skip(self, input), fields(speaker_name = %input.name))]
    pub async fn create_speaker(&self, input: SpeakerInput) -> SpeakerResult<Speaker> {
        Self::validate(&input)?;

        let speaker = input.into_speaker(Uuid::new_v4().to_string());
        self.store.put(&speaker.id, &speaker).await?;

        info!(speaker_id = %speaker.id, "speaker created");
        Ok(speaker)
    }

    #[instrument(skip(self))]
    pub async fn get_speaker(&self, id: &str) -> SpeakerResult<Speaker> {
        Ok(self.store.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_speakers(&self) -> SpeakerResult<Vec<Speaker>> {
        Ok(self.store.list().await?)
    }

    /// Replace the speaker at `id` with `input`, creating it if absent.
    ///
    /// The returned speaker always carries `id`.
    #[instrument(skip(self, input))]
    pub async fn update_speaker(&self, id: &str, input: SpeakerInput) -> SpeakerResult<Speaker> {
        Self::validate(&input)?;

        let speaker = input.into_speaker(id.to_string());
        self.store.put(id, &speaker).await?;

        info!(speaker_id = %id, "speaker updated");
        Ok(speaker)
    }

    /// Remove a speaker. Succeeds whether or not the id exists.
    #[instrument(skip(self))]
    pub async fn delete_speaker(&self, id: &str) -> SpeakerResult<()> {
        self.store.delete(id).await?;
        info!(speaker_id = %id, "speaker deleted");
        Ok(())
    }
}

impl<S: DocumentStore<Speaker>> Clone for SpeakerService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::MemoryDocumentStore;
    use database::document::MockDocumentStore;

    fn input(name: &str) -> SpeakerInput {
        SpeakerInput {
            name: name.into(),
            bio: "Talks about compilers".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = SpeakerService::new(MemoryDocumentStore::new());

        let created = service.create_speaker(input("Grace")).await.unwrap();
        let fetched = service.get_speaker(&created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_blank_name_never_writes() {
        let mut store = MockDocumentStore::<Speaker>::new();
        store.expect_put().never();

        let service = SpeakerService::new(store);
        let err = service.create_speaker(input("")).await.unwrap_err();

        assert!(matches!(err, SpeakerError::Validation(msg) if msg.contains("name")));
    }

    #[tokio::test]
    async fn test_update_forces_path_id() {
        let service = SpeakerService::new(MemoryDocumentStore::new());

        let updated = service.update_speaker("sp-42", input("Grace")).await.unwrap();
        assert_eq!(updated.id, "sp-42");
        assert_eq!(service.get_speaker("sp-42").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_overwrites_in_full() {
        let service = SpeakerService::new(MemoryDocumentStore::new());
        let mut first = input("Grace");
        first.photo_url = Some("https://example.com/grace.png".into());
        service.update_speaker("sp-1", first).await.unwrap();

        service.update_speaker("sp-1", input("Grace")).await.unwrap();

        let stored = service.get_speaker("sp-1").await.unwrap();
        assert_eq!(stored.photo_url, None);
    }

    #[tokio::test]
    async fn test_repeated_update_is_idempotent() {
        let service = SpeakerService::new(MemoryDocumentStore::new());

        let once = service.update_speaker("sp-1", input("Grace")).await.unwrap();
        let twice = service.update_speaker("sp-1", input("Grace")).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(service.list_speakers().await.unwrap(), vec![twice]);
    }

    #[tokio::test]
    async fn test_update_with_invalid_payload_never_writes() {
        let mut store = MockDocumentStore::<Speaker>::new();
        store.expect_put().never();

        let service = SpeakerService::new(store);
        let mut payload = input("Grace");
        payload.bio = String::new();

        let err = service.update_speaker("sp-1", payload).await.unwrap_err();
        assert!(matches!(err, SpeakerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let service = SpeakerService::new(MemoryDocumentStore::new());
        let err = service.get_speaker("ghost").await.unwrap_err();
        assert!(matches!(err, SpeakerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_succeeds() {
        let service = SpeakerService::new(MemoryDocumentStore::new());
        service.delete_speaker("ghost").await.unwrap();
    }
}
