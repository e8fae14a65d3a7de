use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::content::errors::ContentIdError;
use crate::domain::user::models::UserId;

/// Content unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub Uuid);

impl ContentId {
    /// Generate a new random content ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a content ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ContentIdError> {
        Uuid::parse_str(s)
            .map(ContentId)
            .map_err(|e| ContentIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Content aggregate entity.
///
/// A stored link with a title and a free-form type tag, owned by exactly one
/// user. `tags` is a placeholder reference list and stays empty at creation;
/// tagging itself is out of scope.
#[derive(Debug, Clone)]
pub struct Content {
    pub id: ContentId,
    pub link: String,
    pub title: String,
    pub content_type: String,
    pub tags: Vec<String>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Command to store a new content item.
///
/// The owner comes from the authenticated request context, never the body.
#[derive(Debug)]
pub struct CreateContentCommand {
    pub link: String,
    pub title: String,
    pub content_type: String,
}

impl CreateContentCommand {
    pub fn new(link: String, title: String, content_type: String) -> Self {
        Self {
            link,
            title,
            content_type,
        }
    }
}
