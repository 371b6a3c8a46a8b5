//! Report (denúncia) route handlers.
//!
//! When a report names an owning user, that user must exist or the request
//! fails with not-found and no row is written. Deleting a report cascades to
//! its attachments and replies.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{NewReport, ReportRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateReportRequest, ReportResponse, UpdateReportParams};

/// Create report routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(create_report))
        .route(
            "/:id",
            get(get_report).put(update_report).delete(delete_report),
        )
}

/// List all reports.
///
/// GET /api/v1/reports
async fn list_reports(State(state): State<AppState>) -> ApiResult<Vec<ReportResponse>> {
    let repo = ReportRepository::new(state.pool.clone());

    let reports = repo.list().await?;
    let response: Vec<ReportResponse> = reports.into_iter().map(ReportResponse::from).collect();

    Ok(Envelope::success(response))
}

/// Get a report by id.
///
/// GET /api/v1/reports/{id}
async fn get_report(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<ReportResponse> {
    let repo = ReportRepository::new(state.pool.clone());

    let report = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

    Ok(Envelope::success(report.into()))
}

/// Create a new report.
///
/// POST /api/v1/reports
async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> ApiResult<ReportResponse> {
    request.validate()?;

    let report_repo = ReportRepository::new(state.pool.clone());
    let user_repo = UserRepository::new(state.pool.clone());

    if let Some(user_id) = request.user {
        if !user_repo.exists(user_id).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
    }

    let report = report_repo
        .create(&NewReport {
            user_id: request.user,
            state_abbr: request.state_abbr,
            city_name: request.city_name,
            area: request.area,
            geolatitude: request.geolatitude,
            geolongitude: request.geolongitude,
            description: request.description,
        })
        .await?;

    Ok(Envelope::created(report.into()))
}

/// Update report fields from query-string parameters.
///
/// PUT /api/v1/reports/{id}?status=false&description=...
async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<UpdateReportParams>,
) -> ApiResult<ReportResponse> {
    let repo = ReportRepository::new(state.pool.clone());

    let report = repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

    Ok(Envelope::success(report.into()))
}

/// Delete a report and its attachments, returning its prior field values.
///
/// DELETE /api/v1/reports/{id}
async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReportResponse> {
    let repo = ReportRepository::new(state.pool.clone());

    let report = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

    Ok(Envelope::success(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
