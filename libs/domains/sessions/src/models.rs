use database::Document;
use domain_speakers::Speaker;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A scheduled workshop session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display string; never parsed
    pub time: String,
    /// Speaker ids in presentation order. Not checked against the speakers
    /// collection.
    pub speaker_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Document for Session {
    const COLLECTION: &'static str = "sessions";

    fn set_key(&mut self, key: &str) {
        self.id = key.to_string();
    }
}

/// Body of session create and update requests. Any `id` is ignored.
///
/// `speakerIds` must be present but may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Ownership in practice")]
    pub title: String,

    #[validate(length(min = 1, message = "is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Saturday 10:00")]
    pub time: String,

    pub speaker_ids: Vec<String>,

    #[serde(default)]
    pub capacity: Option<u32>,
}

impl SessionInput {
    pub(crate) fn into_session(self, id: String) -> Session {
        Session {
            id,
            title: self.title,
            description: self.description,
            time: self.time,
            speaker_ids: self.speaker_ids,
            capacity: self.capacity,
        }
    }
}

/// A session with its speaker profiles resolved. Serialises as the session's
/// own fields plus `speakers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionWithSpeakers {
    #[serde(flatten)]
    pub session: Session,
    pub speakers: Vec<Speaker>,
}
