use async_trait::async_trait;

use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::models::SharedBrain;
use crate::domain::user::models::UserId;

/// Port for share domain service operations.
#[async_trait]
pub trait ShareServicePort: Send + Sync + 'static {
    /// Create a share link exposing the given user's content.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `HashAlreadyExists` - Hash collision persisted across retries
    async fn create_share_link(&self, owner_id: UserId) -> Result<ShareLink, ShareError>;

    /// Resolve a share hash to the owner's public content view.
    ///
    /// # Errors
    /// * `LinkNotFound` - No share link carries this hash
    /// * `OwnerNotFound` - The link references a user that no longer resolves
    /// * `DatabaseError` - Database operation failed
    async fn resolve_share(&self, hash: &str) -> Result<SharedBrain, ShareError>;
}

/// Persistence operations for the share link aggregate.
///
/// Hash uniqueness is enforced atomically by the store.
#[async_trait]
pub trait ShareLinkRepository: Send + Sync + 'static {
    /// Persist new share link to storage.
    ///
    /// # Errors
    /// * `HashAlreadyExists` - Hash is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, link: ShareLink) -> Result<ShareLink, ShareError>;

    /// Retrieve a share link by its public hash.
    ///
    /// # Returns
    /// Optional share link entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, ShareError>;
}
