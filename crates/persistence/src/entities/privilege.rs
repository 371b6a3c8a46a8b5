//! Privilege entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the privileges table.
#[derive(Debug, Clone, FromRow)]
pub struct PrivilegeEntity {
    pub identifier: String,
    pub assignable: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<PrivilegeEntity> for domain::models::Privilege {
    fn from(entity: PrivilegeEntity) -> Self {
        Self {
            identifier: entity.identifier,
            assignable: entity.assignable,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
