//! Attachment route handlers.
//!
//! An attachment belongs to exactly one report; the report must exist at
//! creation time and the ownership never changes afterwards.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{AttachmentRepository, ReportRepository};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{AttachmentResponse, CreateAttachmentRequest, UpdateAttachmentParams};

/// Create attachment routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attachments).post(create_attachment))
        .route(
            "/:id",
            get(get_attachment)
                .put(update_attachment)
                .delete(delete_attachment),
        )
}

/// List all attachments.
///
/// GET /api/v1/attachments
async fn list_attachments(State(state): State<AppState>) -> ApiResult<Vec<AttachmentResponse>> {
    let repo = AttachmentRepository::new(state.pool.clone());

    let attachments = repo.list().await?;
    let response: Vec<AttachmentResponse> = attachments
        .into_iter()
        .map(AttachmentResponse::from)
        .collect();

    Ok(Envelope::success(response))
}

/// Get an attachment by id.
///
/// GET /api/v1/attachments/{id}
async fn get_attachment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<AttachmentResponse> {
    let repo = AttachmentRepository::new(state.pool.clone());

    let attachment = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Attachment not found".to_string()))?;

    Ok(Envelope::success(attachment.into()))
}

/// Create a new attachment.
///
/// POST /api/v1/attachments
async fn create_attachment(
    State(state): State<AppState>,
    Json(request): Json<CreateAttachmentRequest>,
) -> ApiResult<AttachmentResponse> {
    request.validate()?;

    let attachment_repo = AttachmentRepository::new(state.pool.clone());
    let report_repo = ReportRepository::new(state.pool.clone());

    if !report_repo.exists(request.report).await? {
        return Err(ApiError::NotFound("Report not found".to_string()));
    }

    let attachment = attachment_repo
        .create(request.report, &request.attachment_addr)
        .await?;

    Ok(Envelope::created(attachment.into()))
}

/// Update attachment fields from query-string parameters.
///
/// PUT /api/v1/attachments/{id}?attachment_addr=...
async fn update_attachment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<UpdateAttachmentParams>,
) -> ApiResult<AttachmentResponse> {
    let repo = AttachmentRepository::new(state.pool.clone());

    let attachment = repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Attachment not found".to_string()))?;

    Ok(Envelope::success(attachment.into()))
}

/// Delete an attachment, returning its prior field values.
///
/// DELETE /api/v1/attachments/{id}
async fn delete_attachment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<AttachmentResponse> {
    let repo = AttachmentRepository::new(state.pool.clone());

    let attachment = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Attachment not found".to_string()))?;

    Ok(Envelope::success(attachment.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
