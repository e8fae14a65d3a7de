//! In-memory adapters for the repository ports.
//!
//! Back the full application with process-local state: integration tests
//! spawn the real router against these, and they double as a storage-free
//! mode for local experimentation. Uniqueness guarantees (user email, share
//! hash) are enforced under the same write lock that performs the insert,
//! mirroring the atomicity the SQL constraints provide.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Content;
use crate::domain::content::models::ContentId;
use crate::domain::content::ports::ContentRepository;
use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::ports::ShareLinkRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryContentRepository {
    items: RwLock<Vec<Content>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn create(&self, content: Content) -> Result<Content, ContentError> {
        let mut items = self.items.write().await;
        items.push(content.clone());
        Ok(content)
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Content>, ContentError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id_and_owner(
        &self,
        id: ContentId,
        owner_id: UserId,
    ) -> Result<(), ContentError> {
        let mut items = self.items.write().await;
        items.retain(|c| !(c.id == id && c.owner_id == owner_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryShareLinkRepository {
    links: RwLock<Vec<ShareLink>>,
}

impl InMemoryShareLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareLinkRepository for InMemoryShareLinkRepository {
    async fn create(&self, link: ShareLink) -> Result<ShareLink, ShareError> {
        let mut links = self.links.write().await;

        if links.iter().any(|l| l.hash == link.hash) {
            return Err(ShareError::HashAlreadyExists(link.hash));
        }

        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, ShareError> {
        let links = self.links.read().await;
        Ok(links.iter().find(|l| l.hash == hash).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    fn test_user(email: &str) -> User {
        User {
            id: UserId::new(),
            username: Some("tester".to_string()),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_content(owner_id: UserId) -> Content {
        Content {
            id: ContentId::new(),
            link: "https://example.com".to_string(),
            title: "Example".to_string(),
            content_type: "article".to_string(),
            tags: Vec::new(),
            owner_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_user_email_uniqueness() {
        let repository = InMemoryUserRepository::new();

        repository.create(test_user("a@x.com")).await.unwrap();

        let result = repository.create(test_user("a@x.com")).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_content_delete_is_owner_scoped() {
        let repository = InMemoryContentRepository::new();
        let owner = UserId::new();
        let stranger = UserId::new();

        let content = repository.create(test_content(owner)).await.unwrap();

        repository
            .delete_by_id_and_owner(content.id, stranger)
            .await
            .unwrap();
        assert_eq!(repository.find_by_owner(owner).await.unwrap().len(), 1);

        repository
            .delete_by_id_and_owner(content.id, owner)
            .await
            .unwrap();
        assert!(repository.find_by_owner(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_share_hash_uniqueness() {
        let repository = InMemoryShareLinkRepository::new();
        let owner = UserId::new();

        let link = ShareLink::generate(owner);
        let duplicate = ShareLink {
            id: crate::domain::share::models::ShareLinkId::new(),
            hash: link.hash.clone(),
            owner_id: owner,
            created_at: Utc::now(),
        };

        repository.create(link).await.unwrap();

        let result = repository.create(duplicate).await;
        assert!(matches!(result, Err(ShareError::HashAlreadyExists(_))));
    }
}
