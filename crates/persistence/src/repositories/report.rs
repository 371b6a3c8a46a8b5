//! Report repository.

use anyhow::Result;
use domain::models::{Report, UpdateReportParams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReportEntity;

const REPORT_COLUMNS: &str = r#"
    id, user_id, status, state_abbr, city_name, area, geolatitude,
    geolongitude, description, created_at, last_updated
"#;

/// Input for creating a report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub user_id: Option<Uuid>,
    pub state_abbr: String,
    pub city_name: String,
    pub area: Option<String>,
    pub geolatitude: Option<String>,
    pub geolongitude: Option<String>,
    pub description: Option<String>,
}

/// Repository for report operations.
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all reports.
    pub async fn list(&self) -> Result<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportEntity>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Report::from).collect())
    }

    /// Get a report by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Report>> {
        let row = sqlx::query_as::<_, ReportEntity>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Report::from))
    }

    /// Check if a report exists.
    pub async fn exists(&self, id: i32) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM reports WHERE id = $1) as exists")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Insert a new report row.
    pub async fn create(&self, report: &NewReport) -> Result<Report> {
        let row = sqlx::query_as::<_, ReportEntity>(&format!(
            r#"
            INSERT INTO reports (
                user_id, state_abbr, city_name, area, geolatitude,
                geolongitude, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(report.user_id)
        .bind(&report.state_abbr)
        .bind(&report.city_name)
        .bind(&report.area)
        .bind(&report.geolatitude)
        .bind(&report.geolongitude)
        .bind(&report.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update report fields. Unspecified fields retain their prior values.
    /// Returns None if the report does not exist.
    pub async fn update(&self, id: i32, params: &UpdateReportParams) -> Result<Option<Report>> {
        let row = sqlx::query_as::<_, ReportEntity>(&format!(
            r#"
            UPDATE reports
            SET status = COALESCE($2, status),
                state_abbr = COALESCE($3, state_abbr),
                city_name = COALESCE($4, city_name),
                area = COALESCE($5, area),
                geolatitude = COALESCE($6, geolatitude),
                geolongitude = COALESCE($7, geolongitude),
                description = COALESCE($8, description),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(params.status)
        .bind(params.state_abbr.as_deref())
        .bind(params.city_name.as_deref())
        .bind(params.area.as_deref())
        .bind(params.geolatitude.as_deref())
        .bind(params.geolongitude.as_deref())
        .bind(params.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Report::from))
    }

    /// Delete a report, returning its prior values. Attachments and replies
    /// are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<Option<Report>> {
        let row = sqlx::query_as::<_, ReportEntity>(&format!(
            "DELETE FROM reports WHERE id = $1 RETURNING {REPORT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Report::from))
    }
}
