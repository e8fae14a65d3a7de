use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::content::models::Content;
use crate::domain::user::models::UserId;

/// Share link unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareLinkId(pub Uuid);

impl ShareLinkId {
    /// Generate a new random share link ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ShareLinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShareLinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Share link aggregate entity.
///
/// Maps a public opaque hash to the user whose content it exposes. Links
/// never expire and cannot be revoked.
#[derive(Debug, Clone)]
pub struct ShareLink {
    pub id: ShareLinkId,
    pub hash: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl ShareLink {
    /// Prefix carried by every generated hash.
    pub const HASH_PREFIX: &'static str = "brain-";

    /// Generate a new share link for the given owner.
    ///
    /// The hash is a `brain-` prefixed 128-bit random identifier. Global
    /// uniqueness is enforced by the store's unique constraint; the service
    /// retries generation on the (negligible) chance of a collision.
    pub fn generate(owner_id: UserId) -> Self {
        Self {
            id: ShareLinkId::new(),
            hash: format!("{}{}", Self::HASH_PREFIX, Uuid::new_v4().simple()),
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Read-only public view of one user's stored content.
///
/// Resolved from a share hash without authentication.
#[derive(Debug, Clone)]
pub struct SharedBrain {
    pub username: Option<String>,
    pub content: Vec<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_prefix_and_owner() {
        let owner_id = UserId::new();
        let link = ShareLink::generate(owner_id);

        assert!(link.hash.starts_with(ShareLink::HASH_PREFIX));
        assert_eq!(link.owner_id, owner_id);
    }

    #[test]
    fn test_generated_hashes_differ() {
        let owner_id = UserId::new();
        let first = ShareLink::generate(owner_id);
        let second = ShareLink::generate(owner_id);
        assert_ne!(first.hash, second.hash);
    }
}
