//! The storage contract for posts and comments.
//!
//! [`PostStore`] and [`CommentStore`] are low-level CRUD traits: each call
//! touches one post, one comment, or one post's comment list. They do not
//! check cross-entity rules beyond what the backend enforces natively;
//! existence checks, staged validation and cascade delete live in the
//! service layer on top of [`SocialStore`].
//!
//! Backends ([`InMemoryStore`](crate::InMemoryStore),
//! [`SqliteStore`](crate::SqliteStore)) implement all three traits and are
//! swappable behind `Box<dyn SocialStore + Send>`.

use socials_core::{Comment, CommentId, IdPolicy, Post, PostId};

use crate::error::StorageError;

/// CRUD over post records.
pub trait PostStore {
    /// Stores a new post, assigning its id by the backend's [`IdPolicy`].
    fn insert_post(&mut self, body: &str) -> Result<Post, StorageError>;

    /// Retrieves a post by id.
    fn get_post(&self, id: PostId) -> Result<Post, StorageError>;

    /// Returns whether a post with this id exists.
    fn post_exists(&self, id: PostId) -> Result<bool, StorageError>;

    /// Lists all posts, ordered by id. Empty when there are none.
    fn list_posts(&self) -> Result<Vec<Post>, StorageError>;

    /// Replaces a post's body. The id is unchanged.
    fn update_post(&mut self, id: PostId, body: &str) -> Result<Post, StorageError>;

    /// Deletes a post.
    ///
    /// Fails with [`StorageError::IntegrityError`] while comments still
    /// reference the post; callers remove those first.
    fn delete_post(&mut self, id: PostId) -> Result<(), StorageError>;
}

/// CRUD over comment records.
pub trait CommentStore {
    /// Stores a new comment under `post_id`.
    ///
    /// Fails with [`StorageError::PostNotFound`] if the post is absent.
    fn insert_comment(&mut self, post_id: PostId, comment: &str) -> Result<Comment, StorageError>;

    /// Retrieves a comment by id within the given post.
    fn get_comment(&self, post_id: PostId, comment_id: CommentId)
        -> Result<Comment, StorageError>;

    /// Returns whether any post holds a comment with this id.
    fn comment_exists(&self, comment_id: CommentId) -> Result<bool, StorageError>;

    /// Finds all comments of a post, in storage order. Empty when the post
    /// has none (or does not exist).
    fn find_comments_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError>;

    /// Lists every comment, grouped by post id ascending.
    fn list_comments(&self) -> Result<Vec<Comment>, StorageError>;

    /// Replaces a comment's text.
    fn update_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        comment: &str,
    ) -> Result<Comment, StorageError>;

    /// Deletes one comment from a post.
    fn delete_comment(&mut self, post_id: PostId, comment_id: CommentId)
        -> Result<(), StorageError>;

    /// Deletes every comment of a post, returning how many were removed.
    fn delete_comments_by_post(&mut self, post_id: PostId) -> Result<usize, StorageError>;
}

/// A complete backend for the socials service.
pub trait SocialStore: PostStore + CommentStore {
    /// The id policy this backend applies to both posts and comments.
    fn id_policy(&self) -> IdPolicy;
}
