//! Attachment repository.

use anyhow::Result;
use domain::models::{Attachment, UpdateAttachmentParams};
use sqlx::PgPool;

use crate::entities::AttachmentEntity;

const ATTACHMENT_COLUMNS: &str = "id, report_id, attachment_addr, created_at, last_updated";

/// Repository for attachment operations.
pub struct AttachmentRepository {
    pool: PgPool,
}

impl AttachmentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all attachments.
    pub async fn list(&self) -> Result<Vec<Attachment>> {
        let rows = sqlx::query_as::<_, AttachmentEntity>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Attachment::from).collect())
    }

    /// List the attachments of one report.
    pub async fn list_by_report(&self, report_id: i32) -> Result<Vec<Attachment>> {
        let rows = sqlx::query_as::<_, AttachmentEntity>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments WHERE report_id = $1 ORDER BY id ASC"
        ))
        .bind(report_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Attachment::from).collect())
    }

    /// Get an attachment by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attachment>> {
        let row = sqlx::query_as::<_, AttachmentEntity>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Attachment::from))
    }

    /// Insert a new attachment row.
    pub async fn create(&self, report_id: i32, attachment_addr: &str) -> Result<Attachment> {
        let row = sqlx::query_as::<_, AttachmentEntity>(&format!(
            r#"
            INSERT INTO attachments (report_id, attachment_addr)
            VALUES ($1, $2)
            RETURNING {ATTACHMENT_COLUMNS}
            "#
        ))
        .bind(report_id)
        .bind(attachment_addr)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update attachment fields. Returns None if the attachment does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateAttachmentParams,
    ) -> Result<Option<Attachment>> {
        let row = sqlx::query_as::<_, AttachmentEntity>(&format!(
            r#"
            UPDATE attachments
            SET attachment_addr = COALESCE($2, attachment_addr),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {ATTACHMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.attachment_addr.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Attachment::from))
    }

    /// Delete an attachment, returning its prior values.
    pub async fn delete(&self, id: i32) -> Result<Option<Attachment>> {
        let row = sqlx::query_as::<_, AttachmentEntity>(&format!(
            "DELETE FROM attachments WHERE id = $1 RETURNING {ATTACHMENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Attachment::from))
    }
}
