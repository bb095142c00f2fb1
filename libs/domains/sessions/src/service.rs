//! Session Service - Business logic layer

use axum_helpers::errors::describe_validation_errors;
use database::DocumentStore;
use domain_speakers::Speaker;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::aggregation::join_speakers;
use crate::error::{SessionError, SessionResult};
use crate::models::{Session, SessionInput, SessionWithSpeakers};

/// Session service. Reads the speaker collection only to build the joined
/// session listing.
pub struct SessionService<S, P>
where
    S: DocumentStore<Session>,
    P: DocumentStore<Speaker>,
{
    sessions: Arc<S>,
    speakers: Arc<P>,
}

impl<S, P> SessionService<S, P>
where
    S: DocumentStore<Session>,
    P: DocumentStore<Speaker>,
{
    pub fn new(sessions: S, speakers: P) -> Self {
        Self {
            sessions: Arc::new(sessions),
            speakers: Arc::new(speakers),
        }
    }

    fn validate(input: &SessionInput) -> SessionResult<()> {
        input
            .validate()
            .map_err(|e| SessionError::Validation(describe_validation_errors(&e)))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_session(&self, input: SessionInput) -> SessionResult<Session> {
        Self::validate(&input)?;

        let session = input.into_session(Uuid::new_v4().to_string());
        self.sessions.put(&session.id, &session).await?;

        info!(session_id = %session.id, "session created");
        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn get_session(&self, id: &str) -> SessionResult<Session> {
        Ok(self.sessions.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> SessionResult<Vec<Session>> {
        Ok(self.sessions.list().await?)
    }

    /// Every session with its speakers resolved.
    ///
    /// Both collections are scanned concurrently; either failure fails the
    /// whole listing.
    #[instrument(skip(self))]
    pub async fn list_with_speakers(&self) -> SessionResult<Vec<SessionWithSpeakers>> {
        let (sessions, speakers) = tokio::try_join!(self.sessions.list(), self.speakers.list())?;
        Ok(join_speakers(sessions, &speakers))
    }

    /// Replace the session at `id` with `input`, creating it if absent.
    ///
    /// The returned session always carries `id`.
    #[instrument(skip(self, input))]
    pub async fn update_session(&self, id: &str, input: SessionInput) -> SessionResult<Session> {
        Self::validate(&input)?;

        let session = input.into_session(id.to_string());
        self.sessions.put(id, &session).await?;

        info!(session_id = %id, "session updated");
        Ok(session)
    }

    /// Remove a session. Succeeds whether or not the id exists.
    #[instrument(skip(self))]
    pub async fn delete_session(&self, id: &str) -> SessionResult<()> {
        self.sessions.delete(id).await?;
        info!(session_id = %id, "session deleted");
        Ok(())
    }
}

impl<S, P> Clone for SessionService<S, P>
where
    S: DocumentStore<Session>,
    P: DocumentStore<Speaker>,
{
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            speakers: Arc::clone(&self.speakers),
        }
    }
}
