//! Flag entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the flags table.
#[derive(Debug, Clone, FromRow)]
pub struct FlagEntity {
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<FlagEntity> for domain::models::Flag {
    fn from(entity: FlagEntity) -> Self {
        Self {
            identifier: entity.identifier,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
