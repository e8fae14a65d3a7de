use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::content::ports::ContentRepository;
use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::models::SharedBrain;
use crate::domain::share::ports::ShareLinkRepository;
use crate::domain::share::ports::ShareServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Attempts before giving up when a generated hash collides in the store.
const MAX_HASH_ATTEMPTS: u32 = 3;

/// Concrete implementation of ShareServicePort.
///
/// Resolution spans three aggregates: the link itself, its owning user, and
/// that user's content. Generic over the repositories for testability.
pub struct ShareService<SR, UR, CR>
where
    SR: ShareLinkRepository,
    UR: UserRepository,
    CR: ContentRepository,
{
    share_repository: Arc<SR>,
    user_repository: Arc<UR>,
    content_repository: Arc<CR>,
}

impl<SR, UR, CR> ShareService<SR, UR, CR>
where
    SR: ShareLinkRepository,
    UR: UserRepository,
    CR: ContentRepository,
{
    pub fn new(
        share_repository: Arc<SR>,
        user_repository: Arc<UR>,
        content_repository: Arc<CR>,
    ) -> Self {
        Self {
            share_repository,
            user_repository,
            content_repository,
        }
    }
}

#[async_trait]
impl<SR, UR, CR> ShareServicePort for ShareService<SR, UR, CR>
where
    SR: ShareLinkRepository,
    UR: UserRepository,
    CR: ContentRepository,
{
    async fn create_share_link(&self, owner_id: UserId) -> Result<ShareLink, ShareError> {
        let mut attempts = 0;
        loop {
            let link = ShareLink::generate(owner_id);
            match self.share_repository.create(link).await {
                Err(ShareError::HashAlreadyExists(hash)) if attempts + 1 < MAX_HASH_ATTEMPTS => {
                    attempts += 1;
                    tracing::warn!(hash = %hash, attempts, "Share hash collision, regenerating");
                }
                other => return other,
            }
        }
    }

    async fn resolve_share(&self, hash: &str) -> Result<SharedBrain, ShareError> {
        let link = self
            .share_repository
            .find_by_hash(hash)
            .await?
            .ok_or_else(|| ShareError::LinkNotFound(hash.to_string()))?;

        let owner = self
            .user_repository
            .find_by_id(&link.owner_id)
            .await
            .map_err(|e| ShareError::DatabaseError(e.to_string()))?
            .ok_or_else(|| ShareError::OwnerNotFound(link.owner_id.to_string()))?;

        let content = self
            .content_repository
            .find_by_owner(link.owner_id)
            .await
            .map_err(|e| ShareError::DatabaseError(e.to_string()))?;

        Ok(SharedBrain {
            username: owner.username,
            content,
        })
    }
}
