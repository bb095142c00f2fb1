use database::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A workshop speaker.
///
/// `sessions` is a denormalised list of session ids kept for display; it is
/// not checked against the sessions collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<String>>,
}

impl Document for Speaker {
    const COLLECTION: &'static str = "speakers";

    fn set_key(&mut self, key: &str) {
        self.id = key.to_string();
    }
}

/// Body of speaker create and update requests. Any `id` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerInput {
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Grace Hopper")]
    pub name: String,

    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Pioneer of machine-independent programming languages.")]
    pub bio: String,

    #[serde(default)]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub sessions: Option<Vec<String>>,
}

impl SpeakerInput {
    pub(crate) fn into_speaker(self, id: String) -> Speaker {
        Speaker {
            id,
            name: self.name,
            bio: self.bio,
            photo_url: self.photo_url,
            sessions: self.sessions,
        }
    }
}
