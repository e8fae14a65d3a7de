use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::share::errors::ShareError;
use crate::domain::share::models::ShareLink;
use crate::domain::share::models::ShareLinkId;
use crate::domain::share::ports::ShareLinkRepository;
use crate::domain::user::models::UserId;

pub struct PostgresShareLinkRepository {
    pool: PgPool,
}

impl PostgresShareLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareLinkRepository for PostgresShareLinkRepository {
    async fn create(&self, link: ShareLink) -> Result<ShareLink, ShareError> {
        sqlx::query(
            r#"
            INSERT INTO share_links (id, hash, owner_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(link.id.0)
        .bind(&link.hash)
        .bind(link.owner_id.0)
        .bind(link.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("share_links_hash_key")
                {
                    return ShareError::HashAlreadyExists(link.hash.clone());
                }
            }
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(link)
    }

    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShareLink>, ShareError> {
        let row = sqlx::query(
            r#"
            SELECT id, hash, owner_id, created_at
            FROM share_links
            WHERE hash = $1
            "#,
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ShareError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| ShareLink {
            id: ShareLinkId(r.get("id")),
            hash: r.get("hash"),
            owner_id: UserId(r.get("owner_id")),
            created_at: r.get("created_at"),
        }))
    }
}
