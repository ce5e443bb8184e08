//! Post rules: create, read, update, and delete with comment cascade.

use socials_core::{CoreError, Post, PostComments, PostId};

use super::comments::CascadeOutcome;
use super::SocialService;
use crate::error::ApiError;
use crate::schema::posts::{PostCommentsDeleted, PostDeletedResponse};

impl SocialService {
    /// Stores a new post. The id comes from the backend's id policy.
    pub fn create_post(&mut self, body: &str) -> Result<Post, ApiError> {
        let post = self.store.insert_post(body)?;
        tracing::info!(post_id = %post.id, "post created");
        Ok(post)
    }

    pub fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        self.require_post(id, CoreError::post_not_in_database)
    }

    /// Lists every post by id. An empty store yields an empty list.
    pub fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.store.list_posts()?)
    }

    /// Lists every post with its comments, including posts with none.
    pub fn list_posts_with_comments(&self) -> Result<Vec<PostComments>, ApiError> {
        let posts = self.store.list_posts()?;
        let comments = self.store.list_comments()?;
        Ok(PostComments::group(posts, comments, false))
    }

    /// Replaces a post's body, keeping its id.
    pub fn update_post(&mut self, id: PostId, body: &str) -> Result<Post, ApiError> {
        self.require_post(id, CoreError::post_not_in_database)?;
        Ok(self.store.update_post(id, body)?)
    }

    /// Deletes a post after cascading to its comments.
    ///
    /// The cascade runs first, while the post still exists. Whether or not
    /// there were comments to remove, the post row is deleted afterwards.
    pub fn delete_post(&mut self, id: PostId) -> Result<PostDeletedResponse, ApiError> {
        self.require_post(id, CoreError::post_not_in_database)?;

        let cascade = self.cascade_comments(id)?;
        self.store.delete_post(id)?;

        let post_comments = match cascade {
            CascadeOutcome::Deleted(deleted) => {
                tracing::info!(post_id = %id, comments = deleted.count, "post deleted with comments");
                PostCommentsDeleted {
                    has_comments: true,
                    message: Some(deleted.message()),
                }
            }
            CascadeOutcome::NothingToDelete => {
                tracing::info!(post_id = %id, "post deleted");
                PostCommentsDeleted {
                    has_comments: false,
                    message: None,
                }
            }
        };

        Ok(PostDeletedResponse {
            message: format!("Post with id ({}) deleted successfully!", id),
            post_comments,
        })
    }
}
