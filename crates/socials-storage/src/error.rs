//! Storage error types for socials-storage.
//!
//! [`StorageError`] covers the failure modes of the backends: missing
//! records, SQLite failures, migration failures and integrity violations.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A post with the given id was not found.
    #[error("post not found: {0}")]
    PostNotFound(i64),

    /// A comment with the given id was not found under the given post.
    #[error("comment not found: post={post}, comment={comment}")]
    CommentNotFound { post: i64, comment: i64 },

    /// The underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A data integrity violation was detected.
    #[error("integrity error: {reason}")]
    IntegrityError { reason: String },
}
