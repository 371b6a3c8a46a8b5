//! Privilege repository.

use anyhow::Result;
use domain::models::{Privilege, UpdatePrivilegeParams};
use sqlx::PgPool;

use crate::entities::PrivilegeEntity;

/// Repository for privilege operations.
pub struct PrivilegeRepository {
    pool: PgPool,
}

impl PrivilegeRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all privileges.
    pub async fn list(&self) -> Result<Vec<Privilege>> {
        let rows = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            SELECT identifier, assignable, created_at, last_updated
            FROM privileges
            ORDER BY identifier ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Privilege::from).collect())
    }

    /// Get a privilege by identifier.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Privilege>> {
        let row = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            SELECT identifier, assignable, created_at, last_updated
            FROM privileges
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Privilege::from))
    }

    /// Fetch the privileges matching any of the given identifiers. The result
    /// is the catalog the grant resolver filters the request against; order is
    /// irrelevant here because the resolver follows the requested order.
    pub async fn find_by_identifiers(&self, identifiers: &[String]) -> Result<Vec<Privilege>> {
        let rows = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            SELECT identifier, assignable, created_at, last_updated
            FROM privileges
            WHERE identifier = ANY($1)
            "#,
        )
        .bind(identifiers)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Privilege::from).collect())
    }

    /// Create a new privilege. `assignable` defaults to true.
    pub async fn create(&self, identifier: &str, assignable: Option<bool>) -> Result<Privilege> {
        let row = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            INSERT INTO privileges (identifier, assignable)
            VALUES ($1, COALESCE($2, TRUE))
            RETURNING identifier, assignable, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .bind(assignable)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a privilege. Unspecified fields retain their prior values.
    /// Returns None if the privilege does not exist.
    pub async fn update(
        &self,
        identifier: &str,
        params: &UpdatePrivilegeParams,
    ) -> Result<Option<Privilege>> {
        let row = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            UPDATE privileges
            SET assignable = COALESCE($2, assignable),
                last_updated = NOW()
            WHERE identifier = $1
            RETURNING identifier, assignable, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .bind(params.assignable)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Privilege::from))
    }

    /// Delete a privilege, returning its prior values. Association rows are
    /// removed by the cascade.
    pub async fn delete(&self, identifier: &str) -> Result<Option<Privilege>> {
        let row = sqlx::query_as::<_, PrivilegeEntity>(
            r#"
            DELETE FROM privileges
            WHERE identifier = $1
            RETURNING identifier, assignable, created_at, last_updated
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Privilege::from))
    }
}
