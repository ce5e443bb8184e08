//! SocialService: the single coordinator between HTTP handlers and the
//! storage backend.
//!
//! The post rules live in [`posts`], the comment rules in [`comments`]. Both
//! are `impl SocialService` blocks over one owned [`SocialStore`], so the
//! referential checks and the cascade see the same data. Handlers are thin
//! wrappers that delegate to these methods.

pub mod comments;
pub mod posts;

use socials_core::{CoreError, IdPolicy, Post, PostId};
use socials_storage::{InMemoryStore, SocialStore, SqliteStore, StorageError};

use crate::error::ApiError;

pub use comments::{CascadeOutcome, CommentsDeleted};

/// The service owning the post and comment store.
pub struct SocialService {
    store: Box<dyn SocialStore + Send>,
}

impl SocialService {
    /// Wraps an already opened backend.
    pub fn new(store: Box<dyn SocialStore + Send>) -> Self {
        tracing::debug!(id_policy = %store.id_policy(), "social service ready");
        SocialService { store }
    }

    /// Service over a fresh [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryStore::new()))
    }

    /// Service over a SQLite database file at `path`.
    pub fn sqlite(path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(path)
            .map_err(|e| ApiError::InternalError(format!("failed to open store: {}", e)))?;
        Ok(Self::new(Box::new(store)))
    }

    /// Service over a private in-memory SQLite database (for testing).
    pub fn sqlite_in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open test store: {}", e)))?;
        Ok(Self::new(Box::new(store)))
    }

    /// The id policy of the underlying backend.
    pub fn id_policy(&self) -> IdPolicy {
        self.store.id_policy()
    }

    /// Loads a post, reporting absence with the caller's message.
    fn require_post(&self, id: PostId, missing: fn() -> CoreError) -> Result<Post, ApiError> {
        match self.store.get_post(id) {
            Ok(post) => Ok(post),
            Err(StorageError::PostNotFound(_)) => Err(missing().into()),
            Err(e) => Err(e.into()),
        }
    }
}
