//! Flag route handlers.
//!
//! Flags carry a privilege association resolved through
//! [`domain::services::privileges::resolve_grantable`]: requested identifiers
//! that do not exist or are not assignable are dropped without error, and the
//! response carries the granted subset. The resolved set replaces any prior
//! association.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{FlagRepository, PrivilegeRepository};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateFlagRequest, FlagResponse, UpdateFlagParams};
use domain::services::privileges::{granted_identifiers, resolve_grantable};

/// Create flag routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_flags).post(create_flag))
        .route(
            "/:identifier",
            get(get_flag).put(update_flag).delete(delete_flag),
        )
}

/// Resolve a requested privilege list against the catalog and persist the
/// surviving subset as the flag's association. Returns the granted identifiers.
async fn grant_privileges(
    flag_repo: &FlagRepository,
    privilege_repo: &PrivilegeRepository,
    flag_identifier: &str,
    requested: &[String],
) -> Result<Vec<String>, ApiError> {
    let catalog = privilege_repo.find_by_identifiers(requested).await?;
    let granted = resolve_grantable(requested, &catalog);
    flag_repo
        .replace_privileges(flag_identifier, &granted)
        .await?;
    Ok(granted_identifiers(&granted))
}

/// List all flags with their granted privilege identifiers.
///
/// GET /api/v1/flags
async fn list_flags(State(state): State<AppState>) -> ApiResult<Vec<FlagResponse>> {
    let repo = FlagRepository::new(state.pool.clone());

    let flags = repo.list().await?;
    let mut response = Vec::with_capacity(flags.len());
    for flag in flags {
        let privileges = repo.privileges_of(&flag.identifier).await?;
        response.push(FlagResponse::new(flag, privileges));
    }

    Ok(Envelope::success(response))
}

/// Get a flag by identifier.
///
/// GET /api/v1/flags/{identifier}
async fn get_flag(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<FlagResponse> {
    let repo = FlagRepository::new(state.pool.clone());

    let flag = repo
        .find_by_identifier(&identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flag not found".to_string()))?;
    let privileges = repo.privileges_of(&identifier).await?;

    Ok(Envelope::success(FlagResponse::new(flag, privileges)))
}

/// Create a new flag and grant the resolvable subset of the requested
/// privileges.
///
/// POST /api/v1/flags
async fn create_flag(
    State(state): State<AppState>,
    Json(request): Json<CreateFlagRequest>,
) -> ApiResult<FlagResponse> {
    request.validate()?;

    let flag_repo = FlagRepository::new(state.pool.clone());
    let privilege_repo = PrivilegeRepository::new(state.pool.clone());

    if flag_repo.exists(&request.identifier).await? {
        return Err(ApiError::Conflict(format!(
            "Flag '{}' already exists",
            request.identifier
        )));
    }

    let catalog = privilege_repo
        .find_by_identifiers(&request.privileges)
        .await?;
    let granted = resolve_grantable(&request.privileges, &catalog);

    // Flag row and association land in a single transaction
    let flag = flag_repo
        .create_with_privileges(
            &request.identifier,
            &request.title,
            request.description.as_deref(),
            &granted,
        )
        .await?;

    Ok(Envelope::created(FlagResponse::new(
        flag,
        granted_identifiers(&granted),
    )))
}

/// Update flag fields from query-string parameters. A `privileges` parameter
/// (comma-separated identifiers) re-runs the resolver and replaces the
/// association; without it, the association is left untouched.
///
/// PUT /api/v1/flags/{identifier}?title=...&privileges=a,b
async fn update_flag(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(params): Query<UpdateFlagParams>,
) -> ApiResult<FlagResponse> {
    let flag_repo = FlagRepository::new(state.pool.clone());
    let privilege_repo = PrivilegeRepository::new(state.pool.clone());

    let flag = flag_repo
        .update(&identifier, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flag not found".to_string()))?;

    let privileges = match params.requested_privileges() {
        Some(requested) => {
            grant_privileges(&flag_repo, &privilege_repo, &identifier, &requested).await?
        }
        None => flag_repo.privileges_of(&identifier).await?,
    };

    Ok(Envelope::success(FlagResponse::new(flag, privileges)))
}

/// Delete a flag, returning its prior field values and privilege list.
///
/// DELETE /api/v1/flags/{identifier}
async fn delete_flag(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<FlagResponse> {
    let repo = FlagRepository::new(state.pool.clone());

    // Capture the association before the cascade removes it
    let privileges = repo.privileges_of(&identifier).await?;

    let flag = repo
        .delete(&identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flag not found".to_string()))?;

    Ok(Envelope::success(FlagResponse::new(flag, privileges)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
