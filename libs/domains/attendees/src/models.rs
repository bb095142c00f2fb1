use chrono::{DateTime, Utc};
use database::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registered workshop attendee. Never modified after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Server-assigned UUID v4
    pub id: String,
    pub name: String,
    pub email: String,
    /// Free-text role or job title, grouped verbatim by analytics
    pub designation: String,
    pub registered_at: DateTime<Utc>,
}

impl Document for Attendee {
    const COLLECTION: &'static str = "attendees";

    fn set_key(&mut self, key: &str) {
        self.id = key.to_string();
    }
}

/// Registration payload. `id` and `registeredAt` in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterAttendee {
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[validate(
        length(min = 1, message = "is required"),
        email(message = "must be a valid email address")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Engineer")]
    pub designation: String,
}

impl RegisterAttendee {
    pub(crate) fn into_attendee(self, id: String, registered_at: DateTime<Utc>) -> Attendee {
        Attendee {
            id,
            name: self.name,
            email: self.email,
            designation: self.designation,
            registered_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendeeCount {
    pub count: usize,
}
