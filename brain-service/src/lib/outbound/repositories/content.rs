use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Content;
use crate::domain::content::models::ContentId;
use crate::domain::content::ports::ContentRepository;
use crate::domain::user::models::UserId;

pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_content(row: &sqlx::postgres::PgRow) -> Content {
        Content {
            id: ContentId(row.get("id")),
            link: row.get("link"),
            title: row.get("title"),
            content_type: row.get("content_type"),
            tags: row.get("tags"),
            owner_id: UserId(row.get("owner_id")),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn create(&self, content: Content) -> Result<Content, ContentError> {
        sqlx::query(
            r#"
            INSERT INTO content (id, link, title, content_type, tags, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(content.id.0)
        .bind(&content.link)
        .bind(&content.title)
        .bind(&content.content_type)
        .bind(&content.tags)
        .bind(content.owner_id.0)
        .bind(content.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ContentError::DatabaseError(e.to_string()))?;

        Ok(content)
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Content>, ContentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, link, title, content_type, tags, owner_id, created_at
            FROM content
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContentError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_content).collect())
    }

    async fn delete_by_id_and_owner(
        &self,
        id: ContentId,
        owner_id: UserId,
    ) -> Result<(), ContentError> {
        // Scoping the delete to the owner makes cross-user deletion
        // unrepresentable; zero affected rows is not an error.
        sqlx::query(
            r#"
            DELETE FROM content
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| ContentError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
