//! Notification route handlers.
//!
//! A notification is addressed to one user. The addressee must exist at
//! creation time; an update may re-point `user_id`, but only to a user that
//! exists.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{NotificationRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateNotificationRequest, NotificationResponse, UpdateNotificationParams};

/// Create notification routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route(
            "/:id",
            get(get_notification)
                .put(update_notification)
                .delete(delete_notification),
        )
}

/// List all notifications.
///
/// GET /api/v1/notifications
async fn list_notifications(State(state): State<AppState>) -> ApiResult<Vec<NotificationResponse>> {
    let repo = NotificationRepository::new(state.pool.clone());

    let notifications = repo.list().await?;
    let response: Vec<NotificationResponse> = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();

    Ok(Envelope::success(response))
}

/// Get a notification by id.
///
/// GET /api/v1/notifications/{id}
async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<NotificationResponse> {
    let repo = NotificationRepository::new(state.pool.clone());

    let notification = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;

    Ok(Envelope::success(notification.into()))
}

/// Create a new notification.
///
/// POST /api/v1/notifications
async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> ApiResult<NotificationResponse> {
    request.validate()?;

    let notification_repo = NotificationRepository::new(state.pool.clone());
    let user_repo = UserRepository::new(state.pool.clone());

    if !user_repo.exists(request.user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let notification = notification_repo
        .create(request.user_id, &request.notiftype, &request.content)
        .await?;

    Ok(Envelope::created(notification.into()))
}

/// Update notification fields from query-string parameters.
///
/// PUT /api/v1/notifications/{id}?notiftype=...&content=...
async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<UpdateNotificationParams>,
) -> ApiResult<NotificationResponse> {
    let notification_repo = NotificationRepository::new(state.pool.clone());
    let user_repo = UserRepository::new(state.pool.clone());

    // Re-pointing the addressee requires the target to exist
    if let Some(user_id) = params.user_id {
        if !user_repo.exists(user_id).await? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
    }

    let notification = notification_repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;

    Ok(Envelope::success(notification.into()))
}

/// Delete a notification, returning its prior field values.
///
/// DELETE /api/v1/notifications/{id}
async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<NotificationResponse> {
    let repo = NotificationRepository::new(state.pool.clone());

    let notification = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;

    Ok(Envelope::success(notification.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
