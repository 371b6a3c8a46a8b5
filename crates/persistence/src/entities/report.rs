//! Report entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the reports table.
#[derive(Debug, Clone, FromRow)]
pub struct ReportEntity {
    pub id: i32,
    pub user_id: Option<Uuid>,
    pub status: bool,
    pub state_abbr: String,
    pub city_name: String,
    pub area: Option<String>,
    pub geolatitude: Option<String>,
    pub geolongitude: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<ReportEntity> for domain::models::Report {
    fn from(entity: ReportEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            status: entity.status,
            state_abbr: entity.state_abbr,
            city_name: entity.city_name,
            area: entity.area,
            geolatitude: entity.geolatitude,
            geolongitude: entity.geolongitude,
            description: entity.description,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
