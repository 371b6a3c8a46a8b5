//! User repository.

use anyhow::Result;
use chrono::NaiveDate;
use domain::models::{UpdateUserParams, User};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::UserEntity;

const USER_COLUMNS: &str = r#"
    id, name, passhash, salt, email, status, phone, birthday, zip_code,
    state_abbr, city_name, city_number, area, flag_id, created_at, last_updated
"#;

/// Input for creating a user. Credentials arrive pre-hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub passhash: String,
    pub salt: String,
    pub email: String,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub zip_code: String,
    pub state_abbr: String,
    pub city_name: String,
    pub city_number: Option<i32>,
    pub area: String,
    pub flag_id: Option<String>,
}

/// Repository for user operations.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Get a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row =
            sqlx::query_as::<_, UserEntity>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(User::from))
    }

    /// Check if a user exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1) as exists")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Insert a new user row.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let row = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (
                name, passhash, salt, email, phone, birthday, zip_code,
                state_abbr, city_name, city_number, area, flag_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.name)
        .bind(&user.passhash)
        .bind(&user.salt)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.birthday)
        .bind(&user.zip_code)
        .bind(&user.state_abbr)
        .bind(&user.city_name)
        .bind(user.city_number)
        .bind(&user.area)
        .bind(&user.flag_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update profile fields. Unspecified fields retain their prior values.
    /// Returns None if the user does not exist.
    pub async fn update(&self, id: Uuid, params: &UpdateUserParams) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                status = COALESCE($4, status),
                phone = COALESCE($5, phone),
                birthday = COALESCE($6, birthday),
                zip_code = COALESCE($7, zip_code),
                state_abbr = COALESCE($8, state_abbr),
                city_name = COALESCE($9, city_name),
                city_number = COALESCE($10, city_number),
                area = COALESCE($11, area),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.name.as_deref())
        .bind(params.email.as_deref())
        .bind(params.status)
        .bind(params.phone.as_deref())
        .bind(params.birthday)
        .bind(params.zip_code.as_deref())
        .bind(params.state_abbr.as_deref())
        .bind(params.city_name.as_deref())
        .bind(params.city_number)
        .bind(params.area.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Delete a user, returning their prior values.
    pub async fn delete(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserEntity>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
