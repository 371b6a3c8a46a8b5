//! Privilege route handlers.
//!
//! The identifier is the natural primary key, so only `assignable` is
//! updatable. Duplicate identifiers surface as 409 through the unique-key
//! mapping in [`ApiError`].

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::PrivilegeRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreatePrivilegeRequest, PrivilegeResponse, UpdatePrivilegeParams};

/// Create privilege routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_privileges).post(create_privilege))
        .route(
            "/:identifier",
            get(get_privilege)
                .put(update_privilege)
                .delete(delete_privilege),
        )
}

/// List all privileges.
///
/// GET /api/v1/privileges
async fn list_privileges(State(state): State<AppState>) -> ApiResult<Vec<PrivilegeResponse>> {
    let repo = PrivilegeRepository::new(state.pool.clone());

    let privileges = repo.list().await?;
    let response: Vec<PrivilegeResponse> = privileges
        .into_iter()
        .map(PrivilegeResponse::from)
        .collect();

    Ok(Envelope::success(response))
}

/// Get a privilege by identifier.
///
/// GET /api/v1/privileges/{identifier}
async fn get_privilege(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<PrivilegeResponse> {
    let repo = PrivilegeRepository::new(state.pool.clone());

    let privilege = repo
        .find_by_identifier(&identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound("Privilege not found".to_string()))?;

    Ok(Envelope::success(privilege.into()))
}

/// Create a new privilege. `assignable` defaults to true.
///
/// POST /api/v1/privileges
async fn create_privilege(
    State(state): State<AppState>,
    Json(request): Json<CreatePrivilegeRequest>,
) -> ApiResult<PrivilegeResponse> {
    request.validate()?;

    let repo = PrivilegeRepository::new(state.pool.clone());

    let privilege = repo.create(&request.identifier, request.assignable).await?;

    Ok(Envelope::created(privilege.into()))
}

/// Update privilege fields from query-string parameters.
///
/// PUT /api/v1/privileges/{identifier}?assignable=false
async fn update_privilege(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(params): Query<UpdatePrivilegeParams>,
) -> ApiResult<PrivilegeResponse> {
    let repo = PrivilegeRepository::new(state.pool.clone());

    let privilege = repo
        .update(&identifier, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Privilege not found".to_string()))?;

    Ok(Envelope::success(privilege.into()))
}

/// Delete a privilege, returning its prior field values.
///
/// DELETE /api/v1/privileges/{identifier}
async fn delete_privilege(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<PrivilegeResponse> {
    let repo = PrivilegeRepository::new(state.pool.clone());

    let privilege = repo
        .delete(&identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound("Privilege not found".to_string()))?;

    Ok(Envelope::success(privilege.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
