//! News entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the news table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsEntity {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_at: String,
    pub external_link: String,
    pub state_abbr: String,
    pub city_name: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<NewsEntity> for domain::models::News {
    fn from(entity: NewsEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            source: entity.source,
            published_at: entity.published_at,
            external_link: entity.external_link,
            state_abbr: entity.state_abbr,
            city_name: entity.city_name,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
