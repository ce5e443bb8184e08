//! Comment request types.

use serde::Deserialize;
use socials_core::PostId;

/// Body of `POST /comment` and `PUT /comment/{comment_id}`.
///
/// The comment text is accepted under either `body` or `comment`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub post_id: PostId,
    #[serde(alias = "comment")]
    pub body: String,
}

/// Query string of `DELETE /comment/{comment_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCommentQuery {
    pub post_id: i64,
}
