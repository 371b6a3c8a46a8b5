//! User entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub passhash: String,
    pub salt: String,
    pub email: String,
    pub status: bool,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub zip_code: String,
    pub state_abbr: String,
    pub city_name: String,
    pub city_number: Option<i32>,
    pub area: String,
    pub flag_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            passhash: entity.passhash,
            salt: entity.salt,
            email: entity.email,
            status: entity.status,
            phone: entity.phone,
            birthday: entity.birthday,
            zip_code: entity.zip_code,
            state_abbr: entity.state_abbr,
            city_name: entity.city_name,
            city_number: entity.city_number,
            area: entity.area,
            flag_id: entity.flag_id,
            created_at: entity.created_at,
            last_updated: entity.last_updated,
        }
    }
}
