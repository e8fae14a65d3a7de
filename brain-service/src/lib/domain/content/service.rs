use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Content;
use crate::domain::content::models::ContentId;
use crate::domain::content::models::CreateContentCommand;
use crate::domain::content::ports::ContentRepository;
use crate::domain::content::ports::ContentServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of ContentServicePort.
///
/// Generic over the repository for testability.
pub struct ContentService<CR>
where
    CR: ContentRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContentService<CR>
where
    CR: ContentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContentServicePort for ContentService<CR>
where
    CR: ContentRepository,
{
    async fn create_content(
        &self,
        command: CreateContentCommand,
        owner_id: UserId,
    ) -> Result<Content, ContentError> {
        let content = Content {
            id: ContentId::new(),
            link: command.link,
            title: command.title,
            content_type: command.content_type,
            // Tagging is not implemented; every item starts untagged.
            tags: Vec::new(),
            owner_id,
            created_at: Utc::now(),
        };

        self.repository.create(content).await
    }

    async fn list_content(&self, owner_id: UserId) -> Result<Vec<Content>, ContentError> {
        self.repository.find_by_owner(owner_id).await
    }

    async fn delete_content(&self, id: ContentId, owner_id: UserId) -> Result<(), ContentError> {
        self.repository.delete_by_id_and_owner(id, owner_id).await
    }
}
