//! Success bodies shared by every domain.
//!
//! Writes answer with a message and, when there is something to hand back,
//! the affected record. The payload type is fixed per route so the
//! OpenAPI document shows exactly what each endpoint returns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"message": "...", "data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
