//! Post request/response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /post` and `PUT /post/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    pub body: String,
}

/// Response of `DELETE /post/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDeletedResponse {
    pub message: String,
    /// What happened to the post's comments.
    pub post_comments: PostCommentsDeleted,
}

/// Cascade summary nested in [`PostDeletedResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentsDeleted {
    pub has_comments: bool,
    /// The comment cascade's own confirmation, present when comments existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
