//! Core data model for the socials service: posts, comments, their ids, and
//! the domain errors raised by the post and comment stores.

pub mod comment;
pub mod error;
pub mod id;
pub mod post;

// Re-export commonly used types
pub use comment::{Comment, CommentView, PostComments};
pub use error::CoreError;
pub use id::{gap_reuse_id, CommentId, IdPolicy, PostId};
pub use post::Post;
