//! Reply entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the replies table.
#[derive(Debug, Clone, FromRow)]
pub struct ReplyEntity {
    pub id: i32,
    pub user_id: Uuid,
    pub report_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<ReplyEntity> for domain::models::Reply {
    fn from(entity: ReplyEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            report_id: entity.report_id,
            content: entity.content,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
