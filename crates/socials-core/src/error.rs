//! Domain error types for socials-core.
//!
//! [`CoreError`] carries the client-facing message for each failure. The
//! constructors below hold the exact wording, since clients match on it.

use thiserror::Error;

use crate::id::CommentId;

/// Domain failures of the post and comment stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A referenced post or comment is absent.
    #[error("{message}")]
    NotFound { message: String },

    /// A write referenced a post that does not exist.
    #[error("{message}")]
    InvalidReference { message: String },
}

impl CoreError {
    fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound {
            message: message.into(),
        }
    }

    /// Post lookups on the post routes.
    pub fn post_not_in_database() -> Self {
        Self::not_found("Post id not in database.")
    }

    /// Post lookups on the comment routes.
    pub fn post_not_found() -> Self {
        Self::not_found("Post id not found.")
    }

    pub fn comment_not_found() -> Self {
        Self::not_found("Comment id not found.")
    }

    pub fn post_has_no_comments() -> Self {
        Self::not_found("This post does not have any comments.")
    }

    /// The comment exists, but under a different post.
    pub fn comment_not_on_post(comment_id: CommentId) -> Self {
        Self::not_found(format!(
            "This post does not have this comment_id ({comment_id})"
        ))
    }

    pub fn no_posts() -> Self {
        Self::not_found("No post no comments.")
    }

    pub fn no_comments() -> Self {
        Self::not_found("Comments not found.")
    }

    pub fn comment_on_missing_post() -> Self {
        CoreError::InvalidReference {
            message: "Cannot comment on post_id that does not exist.".to_string(),
        }
    }

    /// The client-facing message.
    pub fn message(&self) -> &str {
        match self {
            CoreError::NotFound { message } | CoreError::InvalidReference { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_messages_are_distinct() {
        let messages = [
            CoreError::post_not_found().to_string(),
            CoreError::comment_not_found().to_string(),
            CoreError::post_has_no_comments().to_string(),
            CoreError::comment_not_on_post(CommentId(3)).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(messages[3], "This post does not have this comment_id (3)");
    }

    #[test]
    fn invalid_reference_is_its_own_kind() {
        let err = CoreError::comment_on_missing_post();
        assert!(matches!(err, CoreError::InvalidReference { .. }));
        assert_eq!(err.message(), "Cannot comment on post_id that does not exist.");
    }
}
