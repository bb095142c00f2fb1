//! Application state management.
//!
//! The state holds the loaded configuration and one store handle per
//! collection. Handles are `Arc<dyn DocumentStore<_>>` so the backend can be
//! picked at startup from `STORE_BACKEND`.

use database::mongodb::{Client, connect_with_retry};
use database::{DocumentStore, MemoryDocumentStore, MongoDocumentStore};
use domain_attendees::Attendee;
use domain_sessions::Session;
use domain_speakers::Speaker;
use eyre::eyre;
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, StoreBackend};

pub type AttendeeStore = Arc<dyn DocumentStore<Attendee>>;
pub type SpeakerStore = Arc<dyn DocumentStore<Speaker>>;
pub type SessionStore = Arc<dyn DocumentStore<Session>>;

/// Shared application state.
///
/// Cloned into every router; every field is a cheap handle clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub attendees: AttendeeStore,
    pub speakers: SpeakerStore,
    pub sessions: SessionStore,
    /// Set when running against MongoDB; used for readiness and shutdown
    pub mongo_client: Option<Client>,
}

impl AppState {
    /// Opens the configured backend. MongoDB is retried with backoff;
    /// exhausting the retries is fatal.
    pub async fn connect(config: Config) -> eyre::Result<Self> {
        match config.store {
            StoreBackend::Memory => {
                info!(workspace = %config.workspace_id, "Using in-memory document store");
                Ok(Self::in_memory(config))
            }
            StoreBackend::MongoDb => {
                let mongo = config
                    .mongodb
                    .clone()
                    .ok_or_else(|| eyre!("STORE_BACKEND=mongodb but no MongoDB settings"))?;

                info!("Connecting to MongoDB at {}", mongo.redacted_url());
                let client = connect_with_retry(&mongo, None).await?;
                let db = client.database(mongo.database());
                let workspace = config.workspace_id.as_str();

                info!(
                    database = %mongo.database(),
                    workspace = %workspace,
                    "Successfully connected to MongoDB"
                );

                Ok(Self {
                    attendees: Arc::new(MongoDocumentStore::<Attendee>::new(&db, workspace)),
                    speakers: Arc::new(MongoDocumentStore::<Speaker>::new(&db, workspace)),
                    sessions: Arc::new(MongoDocumentStore::<Session>::new(&db, workspace)),
                    mongo_client: Some(client),
                    config,
                })
            }
        }
    }

    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            attendees: Arc::new(MemoryDocumentStore::<Attendee>::new()),
            speakers: Arc::new(MemoryDocumentStore::<Speaker>::new()),
            sessions: Arc::new(MemoryDocumentStore::<Session>::new()),
            mongo_client: None,
        }
    }
}
