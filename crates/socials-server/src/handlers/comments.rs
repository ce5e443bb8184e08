//! Comment handlers.
//!
//! `/comment/{id}` is one route shared by three methods: for `GET` the id is
//! a post id, for `PUT` and `DELETE` it is a comment id.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use socials_core::{CommentId, PostComments, PostId};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::schema::comments::{CommentRequest, DeleteCommentQuery};
use crate::schema::common::MessageResponse;
use crate::state::AppState;

/// Comments on an existing post.
///
/// `POST /comment`
pub async fn create_comment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CommentRequest>,
) -> Result<(StatusCode, Json<PostComments>), ApiError> {
    let mut service = state.service.lock().await;
    let created = service.create_comment(req.post_id, &req.body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists every post that has comments.
///
/// `GET /comment/all`
pub async fn list_all_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostComments>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.list_all_comments()?))
}

/// `GET /comment/{post_id}`
pub async fn list_comments_by_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<PostComments>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.list_comments_by_post(PostId(post_id))?))
}

/// `PUT /comment/{comment_id}`
pub async fn update_comment(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<i64>,
    ApiJson(req): ApiJson<CommentRequest>,
) -> Result<Json<PostComments>, ApiError> {
    let mut service = state.service.lock().await;
    let updated = service.update_comment(CommentId(comment_id), req.post_id, &req.body)?;
    Ok(Json(updated))
}

/// `DELETE /comment/post/{post_id}`
pub async fn delete_comments_by_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.delete_comments_by_post(PostId(post_id))?))
}

/// `DELETE /comment/{comment_id}?post_id={post_id}`
pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<DeleteCommentQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.delete_comment(CommentId(comment_id), PostId(query.post_id))?))
}
