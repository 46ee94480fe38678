//! Book model and related types.
//!
//! `Book` is the persisted entity; `BookPayload` is the validated input
//! accepted by the create and update endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A catalog entry. The identifier and both timestamps are assigned by the
/// database; the three text fields are guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, immutable once assigned
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update request body. All three fields are mandatory; a field
/// missing from the JSON body deserializes to an empty string and is
/// rejected by validation rather than by the body decoder, so the client
/// always receives the uniform validation error shape.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
}

impl BookPayload {
    /// Strip surrounding whitespace so blank input fails the length check.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
        }
    }
}
