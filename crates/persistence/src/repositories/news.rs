//! News repository.

use anyhow::Result;
use domain::models::{CreateNewsRequest, News, UpdateNewsParams};
use sqlx::PgPool;

use crate::entities::NewsEntity;

const NEWS_COLUMNS: &str = r#"
    id, title, content, source, published_at, external_link, state_abbr,
    city_name, created_at, last_updated
"#;

/// Repository for news operations.
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all news items.
    pub async fn list(&self) -> Result<Vec<News>> {
        let rows = sqlx::query_as::<_, NewsEntity>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(News::from).collect())
    }

    /// Get a news item by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>> {
        let row = sqlx::query_as::<_, NewsEntity>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(News::from))
    }

    /// Insert a new news row.
    pub async fn create(&self, news: &CreateNewsRequest) -> Result<News> {
        let row = sqlx::query_as::<_, NewsEntity>(&format!(
            r#"
            INSERT INTO news (
                title, content, source, published_at, external_link,
                state_abbr, city_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(&news.title)
        .bind(&news.content)
        .bind(&news.source)
        .bind(&news.published_at)
        .bind(&news.external_link)
        .bind(&news.state_abbr)
        .bind(&news.city_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update news fields. Unspecified fields retain their prior values.
    /// Returns None if the news item does not exist.
    pub async fn update(&self, id: i32, params: &UpdateNewsParams) -> Result<Option<News>> {
        let row = sqlx::query_as::<_, NewsEntity>(&format!(
            r#"
            UPDATE news
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                source = COALESCE($4, source),
                published_at = COALESCE($5, published_at),
                external_link = COALESCE($6, external_link),
                state_abbr = COALESCE($7, state_abbr),
                city_name = COALESCE($8, city_name),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.title.as_deref())
        .bind(params.content.as_deref())
        .bind(params.source.as_deref())
        .bind(params.published_at.as_deref())
        .bind(params.external_link.as_deref())
        .bind(params.state_abbr.as_deref())
        .bind(params.city_name.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(News::from))
    }

    /// Delete a news item, returning its prior values.
    pub async fn delete(&self, id: i32) -> Result<Option<News>> {
        let row = sqlx::query_as::<_, NewsEntity>(&format!(
            "DELETE FROM news WHERE id = $1 RETURNING {NEWS_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(News::from))
    }
}
