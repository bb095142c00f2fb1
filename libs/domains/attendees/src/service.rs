//! Attendee Service - Business logic layer

use axum_helpers::errors::describe_validation_errors;
use chrono::Utc;
use database::DocumentStore;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::analytics::{DesignationBreakdown, designation_breakdown};
use crate::error::{AttendeeError, AttendeeResult};
use crate::models::{Attendee, RegisterAttendee};

/// Attendee service providing registration, roster and analytics operations.
pub struct AttendeeService<S: DocumentStore<Attendee>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Attendee>> AttendeeService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Register a new attendee.
    ///
    /// The payload is validated before anything is written. The id and
    /// registration time are always assigned here.
    #[instrument(skip(self, input), fields(designation = %input.designation))]
    pub async fn register(&self, input: RegisterAttendee) -> AttendeeResult<Attendee> {
        input
            .validate()
            .map_err(|e| AttendeeError::Validation(describe_validation_errors(&e)))?;

        let attendee = input.into_attendee(Uuid::new_v4().to_string(), Utc::now());
        self.store.put(&attendee.id, &attendee).await?;

        info!(attendee_id = %attendee.id, "attendee registered");
        Ok(attendee)
    }

    #[instrument(skip(self))]
    pub async fn list_attendees(&self) -> AttendeeResult<Vec<Attendee>> {
        Ok(self.store.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_attendee(&self, id: &str) -> AttendeeResult<Attendee> {
        Ok(self.store.get(id).await?)
    }

    /// Remove an attendee. Succeeds whether or not the id exists.
    #[instrument(skip(self))]
    pub async fn delete_attendee(&self, id: &str) -> AttendeeResult<()> {
        self.store.delete(id).await?;
        info!(attendee_id = %id, "attendee deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn count_attendees(&self) -> AttendeeResult<usize> {
        Ok(self.store.list().await?.len())
    }

    #[instrument(skip(self))]
    pub async fn designation_breakdown(&self) -> AttendeeResult<Vec<DesignationBreakdown>> {
        let attendees = self.store.list().await?;
        Ok(designation_breakdown(&attendees))
    }
}

impl<S: DocumentStore<Attendee>> Clone for AttendeeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::document::MockDocumentStore;
    use database::{MemoryDocumentStore, StoreError};

    fn payload(email: &str) -> RegisterAttendee {
        RegisterAttendee {
            name: "Grace Hopper".into(),
            email: email.into(),
            designation: "Admiral".into(),
        }
    }

    #[tokio::test]
    async fn test_register_assigns_fresh_id_and_timestamp() {
        let service = AttendeeService::new(MemoryDocumentStore::new());
        let before = Utc::now();

        let first = service.register(payload("grace@example.com")).await.unwrap();
        let second = service.register(payload("grace@example.com")).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(first.registered_at >= before);
        assert!(first.registered_at <= Utc::now());
        assert_eq!(service.get_attendee(&first.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_register_with_bad_email_never_writes() {
        let mut store = MockDocumentStore::<Attendee>::new();
        store.expect_put().never();

        let service = AttendeeService::new(store);
        let err = service.register(payload("nope")).await.unwrap_err();

        assert!(matches!(err, AttendeeError::Validation(msg) if msg.contains("email")));
    }

    #[tokio::test]
    async fn test_register_with_empty_email_never_writes() {
        let mut store = MockDocumentStore::<Attendee>::new();
        store.expect_put().never();

        let service = AttendeeService::new(store);
        let err = service.register(payload("")).await.unwrap_err();

        assert!(matches!(err, AttendeeError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_writes_under_generated_id() {
        let mut store = MockDocumentStore::<Attendee>::new();
        store
            .expect_put()
            .withf(|key, attendee| key.to_string() == attendee.id && !attendee.id.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AttendeeService::new(store);
        let attendee = service.register(payload("grace@example.com")).await.unwrap();
        assert_eq!(attendee.email, "grace@example.com");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = AttendeeService::new(MemoryDocumentStore::new());
        let err = service.get_attendee("missing").await.unwrap_err();
        assert!(matches!(err, AttendeeError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let service = AttendeeService::new(MemoryDocumentStore::new());
        service.delete_attendee("never-registered").await.unwrap();
    }

    #[tokio::test]
    async fn test_count_and_breakdown_follow_roster() {
        let service = AttendeeService::new(MemoryDocumentStore::new());
        for designation in ["Eng", "Eng", "PM"] {
            let mut input = payload("x@example.com");
            input.designation = designation.into();
            service.register(input).await.unwrap();
        }

        assert_eq!(service.count_attendees().await.unwrap(), 3);

        let rows = service.designation_breakdown().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].designation, "Eng");
        assert_eq!(rows[0].count, 2);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let mut store = MockDocumentStore::<Attendee>::new();
        store
            .expect_list()
            .returning(|| Err(StoreError::Backend("connection reset".into())));

        let service = AttendeeService::new(store);
        let err = service.count_attendees().await.unwrap_err();
        assert!(matches!(err, AttendeeError::Store(_)));
    }
}
