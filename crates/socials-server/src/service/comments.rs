//! Comment rules: referential checks, staged lookup, and bulk delete.
//!
//! Updates and single deletes go through [`SocialService::locate_comment`],
//! which checks, in order: the post exists, the comment id exists under any
//! post, the post has comments, and the post holds that comment id. Each
//! stage has its own message.

use socials_core::{CommentId, CoreError, Post, PostComments, PostId};
use socials_storage::StorageError;

use super::SocialService;
use crate::error::ApiError;
use crate::schema::common::MessageResponse;

/// Result of removing a post's comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// At least one comment was removed.
    Deleted(CommentsDeleted),
    /// The post had no comments.
    NothingToDelete,
}

/// Summary of a bulk comment delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsDeleted {
    pub post_id: PostId,
    pub count: usize,
}

impl CommentsDeleted {
    pub fn message(&self) -> String {
        format!(
            "All comments on post_id ({}) have been deleted successfully.",
            self.post_id
        )
    }
}

impl SocialService {
    /// Adds a comment to an existing post.
    ///
    /// Returns the post with only the new comment attached.
    pub fn create_comment(&mut self, post_id: PostId, body: &str) -> Result<PostComments, ApiError> {
        let post = match self.store.get_post(post_id) {
            Ok(post) => post,
            Err(StorageError::PostNotFound(_)) => {
                tracing::debug!(post_id = %post_id, "comment rejected: post does not exist");
                return Err(CoreError::comment_on_missing_post().into());
            }
            Err(e) => return Err(e.into()),
        };

        let comment = self.store.insert_comment(post_id, body)?;
        tracing::info!(post_id = %post_id, comment_id = %comment.id, "comment created");
        Ok(PostComments::new(post, [comment]))
    }

    /// Returns a post with all of its comments; the list may be empty.
    pub fn list_comments_by_post(&self, post_id: PostId) -> Result<PostComments, ApiError> {
        let post = self.require_post(post_id, CoreError::post_not_found)?;
        let comments = self.store.find_comments_by_post(post_id)?;
        Ok(PostComments::new(post, comments))
    }

    /// Returns every post that has comments, each with its comments.
    ///
    /// Fails when there are no posts at all, and separately when there are
    /// posts but no comments anywhere.
    pub fn list_all_comments(&self) -> Result<Vec<PostComments>, ApiError> {
        let posts = self.store.list_posts()?;
        if posts.is_empty() {
            return Err(CoreError::no_posts().into());
        }
        let comments = self.store.list_comments()?;
        if comments.is_empty() {
            return Err(CoreError::no_comments().into());
        }
        Ok(PostComments::group(posts, comments, true))
    }

    /// Replaces a comment's text after the staged lookup.
    ///
    /// Returns the post with only the updated comment attached.
    pub fn update_comment(
        &mut self,
        comment_id: CommentId,
        post_id: PostId,
        body: &str,
    ) -> Result<PostComments, ApiError> {
        let post = self.locate_comment(comment_id, post_id)?;
        let comment = self.store.update_comment(post_id, comment_id, body)?;
        tracing::info!(post_id = %post_id, comment_id = %comment_id, "comment updated");
        Ok(PostComments::new(post, [comment]))
    }

    /// Deletes every comment of a post.
    pub fn delete_comments_by_post(&mut self, post_id: PostId) -> Result<MessageResponse, ApiError> {
        match self.cascade_comments(post_id)? {
            CascadeOutcome::Deleted(deleted) => Ok(MessageResponse::new(deleted.message())),
            CascadeOutcome::NothingToDelete => Err(CoreError::post_has_no_comments().into()),
        }
    }

    /// Deletes one comment after the staged lookup.
    pub fn delete_comment(
        &mut self,
        comment_id: CommentId,
        post_id: PostId,
    ) -> Result<MessageResponse, ApiError> {
        self.locate_comment(comment_id, post_id)?;
        self.store.delete_comment(post_id, comment_id)?;
        tracing::info!(post_id = %post_id, comment_id = %comment_id, "comment deleted");
        Ok(MessageResponse::new("Comment deleted successfully!"))
    }

    /// Removes all comments of an existing post.
    ///
    /// Also the cascade hook of [`SocialService::delete_post`]; an empty
    /// comment list is reported as [`CascadeOutcome::NothingToDelete`], not
    /// as an error.
    pub(crate) fn cascade_comments(&mut self, post_id: PostId) -> Result<CascadeOutcome, ApiError> {
        self.require_post(post_id, CoreError::post_not_found)?;
        let count = self.store.delete_comments_by_post(post_id)?;
        if count == 0 {
            return Ok(CascadeOutcome::NothingToDelete);
        }
        tracing::debug!(post_id = %post_id, count, "comments removed");
        Ok(CascadeOutcome::Deleted(CommentsDeleted { post_id, count }))
    }

    /// Staged lookup shared by update and single delete. Nothing is written
    /// until every stage passes.
    fn locate_comment(&self, comment_id: CommentId, post_id: PostId) -> Result<Post, ApiError> {
        let post = self.require_post(post_id, CoreError::post_not_found)?;

        if !self.store.comment_exists(comment_id)? {
            return Err(CoreError::comment_not_found().into());
        }

        if self.store.find_comments_by_post(post_id)?.is_empty() {
            return Err(CoreError::post_has_no_comments().into());
        }

        match self.store.get_comment(post_id, comment_id) {
            Ok(_) => Ok(post),
            Err(StorageError::CommentNotFound { .. }) => {
                Err(CoreError::comment_not_on_post(comment_id).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
