//! Notification repository.

use anyhow::Result;
use domain::models::{Notification, UpdateNotificationParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::NotificationEntity;

const NOTIFICATION_COLUMNS: &str = "id, user_id, notiftype, content, created_at, last_updated";

/// Repository for notification operations.
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all notifications.
    pub async fn list(&self) -> Result<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationEntity>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    /// Get a notification by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationEntity>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Notification::from))
    }

    /// Insert a new notification row.
    pub async fn create(&self, user_id: Uuid, notiftype: &str, content: &str) -> Result<Notification> {
        let row = sqlx::query_as::<_, NotificationEntity>(&format!(
            r#"
            INSERT INTO notifications (user_id, notiftype, content)
            VALUES ($1, $2, $3)
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(notiftype)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update notification fields, including re-pointing the addressee (the
    /// handler checks that the target user exists before calling this).
    /// Returns None if the notification does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateNotificationParams,
    ) -> Result<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationEntity>(&format!(
            r#"
            UPDATE notifications
            SET notiftype = COALESCE($2, notiftype),
                content = COALESCE($3, content),
                user_id = COALESCE($4, user_id),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.notiftype.as_deref())
        .bind(params.content.as_deref())
        .bind(params.user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Notification::from))
    }

    /// Delete a notification, returning its prior values.
    pub async fn delete(&self, id: i32) -> Result<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationEntity>(&format!(
            "DELETE FROM notifications WHERE id = $1 RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Notification::from))
    }
}
