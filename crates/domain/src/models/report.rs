//! Report (denúncia) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A complaint record. Coordinates are kept as opaque strings, as submitted
/// by the reporting clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
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

/// Request to create a report. When `user` is present it must reference an
/// existing user or the request fails with not-found.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    pub user: Option<Uuid>,
    #[validate(custom(function = "shared::validation::validate_state_abbr"))]
    pub state_abbr: String,
    #[validate(length(min = 1, message = "City name is required"))]
    pub city_name: String,
    pub area: Option<String>,
    pub geolatitude: Option<String>,
    pub geolongitude: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

/// Report wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
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

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            user_id: report.user_id,
            status: report.status,
            state_abbr: report.state_abbr,
            city_name: report.city_name,
            area: report.area,
            geolatitude: report.geolatitude,
            geolongitude: report.geolongitude,
            description: report.description,
            created_at: report.created_at,
            last_updated: report.last_updated,
        }
    }
}

/// Updatable report fields, taken from query-string parameters. The owning
/// user, id and timestamps are not updatable.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateReportParams {
    pub status: Option<bool>,
    pub state_abbr: Option<String>,
    pub city_name: Option<String>,
    pub area: Option<String>,
    pub geolatitude: Option<String>,
    pub geolongitude: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateReportRequest {
            user: None,
            state_abbr: "SP".to_string(),
            city_name: "São Paulo".to_string(),
            area: Some("Bela Vista".to_string()),
            geolatitude: Some("-23.561414".to_string()),
            geolongitude: Some("-46.655881".to_string()),
            description: Some("Água parada em terreno baldio".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_state() {
        let request = CreateReportRequest {
            user: None,
            state_abbr: "São Paulo".to_string(),
            city_name: "São Paulo".to_string(),
            area: None,
            geolatitude: None,
            geolongitude: None,
            description: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_report_response_from() {
        let report = Report {
            id: 42,
            user_id: Some(Uuid::new_v4()),
            status: true,
            state_abbr: "RJ".to_string(),
            city_name: "Rio de Janeiro".to_string(),
            area: None,
            geolatitude: None,
            geolongitude: None,
            description: None,
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response: ReportResponse = report.clone().into();
        assert_eq!(response.id, 42);
        assert_eq!(response.user_id, report.user_id);
        assert!(response.status);
    }
}
