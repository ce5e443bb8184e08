//! Post handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use socials_core::{Post, PostComments, PostId};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::schema::posts::{PostDeletedResponse, PostRequest};
use crate::state::AppState;

/// Creates a post.
///
/// `POST /post`
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let mut service = state.service.lock().await;
    let post = service.create_post(&req.body)?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Lists all posts; `[]` when there are none.
///
/// `GET /post/all`
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.list_posts()?))
}

/// Lists all posts with their comments.
///
/// `GET /post/all/comments`
pub async fn list_posts_with_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostComments>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.list_posts_with_comments()?))
}

/// `GET /post/{id}`
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Post>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.get_post(PostId(id))?))
}

/// Replaces a post's body.
///
/// `PUT /post/{id}`
pub async fn update_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<PostRequest>,
) -> Result<Json<Post>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.update_post(PostId(id), &req.body)?))
}

/// Deletes a post and its comments.
///
/// `DELETE /post/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<PostDeletedResponse>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.delete_post(PostId(id))?))
}
