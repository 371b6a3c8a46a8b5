//! Reply repository.

use anyhow::Result;
use domain::models::{Reply, UpdateReplyParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReplyEntity;

const REPLY_COLUMNS: &str = "id, user_id, report_id, content, created_at, last_updated";

/// Repository for reply operations.
pub struct ReplyRepository {
    pool: PgPool,
}

impl ReplyRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all replies.
    pub async fn list(&self) -> Result<Vec<Reply>> {
        let rows = sqlx::query_as::<_, ReplyEntity>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reply::from).collect())
    }

    /// Get a reply by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyEntity>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reply::from))
    }

    /// Insert a new reply row.
    pub async fn create(&self, user_id: Uuid, report_id: i32, content: &str) -> Result<Reply> {
        let row = sqlx::query_as::<_, ReplyEntity>(&format!(
            r#"
            INSERT INTO replies (user_id, report_id, content)
            VALUES ($1, $2, $3)
            RETURNING {REPLY_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(report_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update reply fields. The author and the report cannot be changed.
    /// Returns None if the reply does not exist.
    pub async fn update(&self, id: i32, params: &UpdateReplyParams) -> Result<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyEntity>(&format!(
            r#"
            UPDATE replies
            SET content = COALESCE($2, content),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {REPLY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.content.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reply::from))
    }

    /// Delete a reply, returning its prior values.
    pub async fn delete(&self, id: i32) -> Result<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyEntity>(&format!(
            "DELETE FROM replies WHERE id = $1 RETURNING {REPLY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reply::from))
    }
}
