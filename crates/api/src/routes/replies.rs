//! Reply route handlers.
//!
//! A reply references both its author and its report; both must exist at
//! creation time and neither can be re-pointed afterwards.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{ReplyRepository, ReportRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateReplyRequest, ReplyResponse, UpdateReplyParams};

/// Create reply routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_replies).post(create_reply))
        .route(
            "/:id",
            get(get_reply).put(update_reply).delete(delete_reply),
        )
}

/// List all replies.
///
/// GET /api/v1/replies
async fn list_replies(State(state): State<AppState>) -> ApiResult<Vec<ReplyResponse>> {
    let repo = ReplyRepository::new(state.pool.clone());

    let replies = repo.list().await?;
    let response: Vec<ReplyResponse> = replies.into_iter().map(ReplyResponse::from).collect();

    Ok(Envelope::success(response))
}

/// Get a reply by id.
///
/// GET /api/v1/replies/{id}
async fn get_reply(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<ReplyResponse> {
    let repo = ReplyRepository::new(state.pool.clone());

    let reply = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found".to_string()))?;

    Ok(Envelope::success(reply.into()))
}

/// Create a new reply.
///
/// POST /api/v1/replies
async fn create_reply(
    State(state): State<AppState>,
    Json(request): Json<CreateReplyRequest>,
) -> ApiResult<ReplyResponse> {
    request.validate()?;

    let reply_repo = ReplyRepository::new(state.pool.clone());
    let user_repo = UserRepository::new(state.pool.clone());
    let report_repo = ReportRepository::new(state.pool.clone());

    if !user_repo.exists(request.user).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    if !report_repo.exists(request.report).await? {
        return Err(ApiError::NotFound("Report not found".to_string()));
    }

    let reply = reply_repo
        .create(request.user, request.report, &request.content)
        .await?;

    Ok(Envelope::created(reply.into()))
}

/// Update reply fields from query-string parameters.
///
/// PUT /api/v1/replies/{id}?content=...
async fn update_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<UpdateReplyParams>,
) -> ApiResult<ReplyResponse> {
    let repo = ReplyRepository::new(state.pool.clone());

    let reply = repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found".to_string()))?;

    Ok(Envelope::success(reply.into()))
}

/// Delete a reply, returning its prior field values.
///
/// DELETE /api/v1/replies/{id}
async fn delete_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReplyResponse> {
    let repo = ReplyRepository::new(state.pool.clone());

    let reply = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Reply not found".to_string()))?;

    Ok(Envelope::success(reply.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
