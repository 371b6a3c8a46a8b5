//! User route handlers.
//!
//! Registration hashes the password with argon2 before anything is persisted;
//! credentials never appear in responses. A flag identifier supplied at
//! registration must reference an existing flag.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::{FlagRepository, NewUser, UserRepository};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateUserRequest, UpdateUserParams, UserResponse};

/// Create user routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users.
///
/// GET /api/v1/users
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let users = repo.list().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Envelope::success(response))
}

/// Get a user by id.
///
/// GET /api/v1/users/{id}
async fn get_user(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<UserResponse> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Envelope::success(user.into()))
}

/// Register a new user.
///
/// POST /api/v1/users
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    let flag_repo = FlagRepository::new(state.pool.clone());

    // A requested flag must exist before we hash anything
    if let Some(ref flag_id) = request.flag {
        if !flag_repo.exists(flag_id).await? {
            return Err(ApiError::NotFound("Flag not found".to_string()));
        }
    }

    let salt = shared::password::generate_salt();
    let passhash = shared::password::hash_password(&request.password, &salt)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = user_repo
        .create(&NewUser {
            name: request.name,
            passhash,
            salt,
            email: request.email,
            phone: request.phone,
            birthday: request.birthday,
            zip_code: request.zip_code,
            state_abbr: request.state_abbr,
            city_name: request.city_name,
            city_number: request.city_number,
            area: request.area,
            flag_id: request.flag,
        })
        .await?;

    Ok(Envelope::created(user.into()))
}

/// Update user profile fields from query-string parameters.
///
/// PUT /api/v1/users/{id}?name=...&email=...
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UpdateUserParams>,
) -> ApiResult<UserResponse> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Envelope::success(user.into()))
}

/// Delete a user, returning their prior field values.
///
/// DELETE /api/v1/users/{id}
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<UserResponse> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Envelope::success(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
