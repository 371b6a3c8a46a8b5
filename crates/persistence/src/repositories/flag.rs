//! Flag repository, including the privilege association.

use anyhow::Result;
use domain::models::{Flag, Privilege, UpdateFlagParams};
use sqlx::PgPool;

use crate::entities::FlagEntity;

/// Repository for flag operations.
pub struct FlagRepository {
    pool: PgPool,
}

impl FlagRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all flags.
    pub async fn list(&self) -> Result<Vec<Flag>> {
        let rows = sqlx::query_as::<_, FlagEntity>(
            r#"
            SELECT identifier, title, description, created_at, last_updated
            FROM flags
            ORDER BY identifier ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flag::from).collect())
    }

    /// Get a flag by identifier.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Flag>> {
        let row = sqlx::query_as::<_, FlagEntity>(
            r#"
            SELECT identifier, title, description, created_at, last_updated
            FROM flags
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flag::from))
    }

    /// Check if a flag exists.
    pub async fn exists(&self, identifier: &str) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM flags WHERE identifier = $1) as exists
            "#,
        )
        .bind(identifier)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Create a flag together with its privilege association in one
    /// transaction, so a failed grant never leaves a flag behind. The grant
    /// keeps the resolved order and duplicates.
    pub async fn create_with_privileges(
        &self,
        identifier: &str,
        title: &str,
        description: Option<&str>,
        granted: &[Privilege],
    ) -> Result<Flag> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, FlagEntity>(
            r#"
            INSERT INTO flags (identifier, title, description)
            VALUES ($1, $2, $3)
            RETURNING identifier, title, description, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .bind(title)
        .bind(description)
        .fetch_one(&mut *tx)
        .await?;

        for privilege in granted {
            sqlx::query(
                r#"
                INSERT INTO flags_privileges (flag_identifier, privilege_identifier)
                VALUES ($1, $2)
                "#,
            )
            .bind(identifier)
            .bind(&privilege.identifier)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(row.into())
    }

    /// Update flag fields. Unspecified fields retain their prior values; the
    /// privilege association is handled separately. Returns None if the flag
    /// does not exist.
    pub async fn update(&self, identifier: &str, params: &UpdateFlagParams) -> Result<Option<Flag>> {
        let row = sqlx::query_as::<_, FlagEntity>(
            r#"
            UPDATE flags
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                last_updated = NOW()
            WHERE identifier = $1
            RETURNING identifier, title, description, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .bind(params.title.as_deref())
        .bind(params.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flag::from))
    }

    /// Delete a flag, returning its prior values. Association rows are
    /// removed by the cascade.
    pub async fn delete(&self, identifier: &str) -> Result<Option<Flag>> {
        let row = sqlx::query_as::<_, FlagEntity>(
            r#"
            DELETE FROM flags
            WHERE identifier = $1
            RETURNING identifier, title, description, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flag::from))
    }

    /// Replace the flag's privilege set with the resolved grant, in one
    /// transaction. The grant keeps the requested order and duplicates.
    pub async fn replace_privileges(&self, identifier: &str, granted: &[Privilege]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM flags_privileges WHERE flag_identifier = $1")
            .bind(identifier)
            .execute(&mut *tx)
            .await?;

        for privilege in granted {
            sqlx::query(
                r#"
                INSERT INTO flags_privileges (flag_identifier, privilege_identifier)
                VALUES ($1, $2)
                "#,
            )
            .bind(identifier)
            .bind(&privilege.identifier)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// List the privilege identifiers currently granted to a flag.
    pub async fn privileges_of(&self, identifier: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT privilege_identifier
            FROM flags_privileges
            WHERE flag_identifier = $1
            ORDER BY privilege_identifier ASC
            "#,
        )
        .bind(identifier)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(identifier,)| identifier).collect())
    }
}
