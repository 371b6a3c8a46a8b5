//! Attachment entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the attachments table.
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentEntity {
    pub id: i32,
    pub report_id: i32,
    pub attachment_addr: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<AttachmentEntity> for domain::models::Attachment {
    fn from(entity: AttachmentEntity) -> Self {
        Self {
            id: entity.id,
            report_id: entity.report_id,
            attachment_addr: entity.attachment_addr,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
