use async_trait::async_trait;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Content;
use crate::domain::content::models::ContentId;
use crate::domain::content::models::CreateContentCommand;
use crate::domain::user::models::UserId;

/// Port for content domain service operations.
#[async_trait]
pub trait ContentServicePort: Send + Sync + 'static {
    /// Store a new content item for the given owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_content(
        &self,
        command: CreateContentCommand,
        owner_id: UserId,
    ) -> Result<Content, ContentError>;

    /// List all content owned by the given user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_content(&self, owner_id: UserId) -> Result<Vec<Content>, ContentError>;

    /// Delete at most one content item matching both id and owner.
    ///
    /// A no-op when nothing matches; a non-owner can never delete another
    /// user's item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_content(&self, id: ContentId, owner_id: UserId) -> Result<(), ContentError>;
}

/// Persistence operations for the content aggregate.
#[async_trait]
pub trait ContentRepository: Send + Sync + 'static {
    /// Persist new content to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, content: Content) -> Result<Content, ContentError>;

    /// Retrieve all content rows whose owner matches.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Content>, ContentError>;

    /// Delete the row matching both id and owner, if any.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_id_and_owner(
        &self,
        id: ContentId,
        owner_id: UserId,
    ) -> Result<(), ContentError>;
}
