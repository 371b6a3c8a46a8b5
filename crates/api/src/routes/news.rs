//! News route handlers.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use persistence::repositories::NewsRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::{ApiResult, Envelope};

use domain::models::{CreateNewsRequest, NewsResponse, UpdateNewsParams};

/// Create news routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_news).post(create_news))
        .route("/:id", get(get_news).put(update_news).delete(delete_news))
}

/// List all news items.
///
/// GET /api/v1/news
async fn list_news(State(state): State<AppState>) -> ApiResult<Vec<NewsResponse>> {
    let repo = NewsRepository::new(state.pool.clone());

    let items = repo.list().await?;
    let response: Vec<NewsResponse> = items.into_iter().map(NewsResponse::from).collect();

    Ok(Envelope::success(response))
}

/// Get a news item by id.
///
/// GET /api/v1/news/{id}
async fn get_news(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<NewsResponse> {
    let repo = NewsRepository::new(state.pool.clone());

    let news = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("News item not found".to_string()))?;

    Ok(Envelope::success(news.into()))
}

/// Create a new news item.
///
/// POST /api/v1/news
async fn create_news(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsRequest>,
) -> ApiResult<NewsResponse> {
    request.validate()?;

    let repo = NewsRepository::new(state.pool.clone());

    let news = repo.create(&request).await?;

    Ok(Envelope::created(news.into()))
}

/// Update news fields from query-string parameters.
///
/// PUT /api/v1/news/{id}?title=...
async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<UpdateNewsParams>,
) -> ApiResult<NewsResponse> {
    let repo = NewsRepository::new(state.pool.clone());

    let news = repo
        .update(id, &params)
        .await?
        .ok_or_else(|| ApiError::NotFound("News item not found".to_string()))?;

    Ok(Envelope::success(news.into()))
}

/// Delete a news item, returning its prior field values.
///
/// DELETE /api/v1/news/{id}
async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<NewsResponse> {
    let repo = NewsRepository::new(state.pool.clone());

    let news = repo
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("News item not found".to_string()))?;

    Ok(Envelope::success(news.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
