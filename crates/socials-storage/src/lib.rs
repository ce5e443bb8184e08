//! Storage abstraction for socials posts and comments.
//!
//! Provides the [`PostStore`] and [`CommentStore`] traits defining the
//! storage contract, the [`SocialStore`] supertrait that backends implement,
//! and two first-class backends: [`InMemoryStore`] and [`SqliteStore`].
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: PostStore / CommentStore / SocialStore definitions
//! - [`memory`]: InMemoryStore implementation (gap-reuse ids)
//! - [`schema`]: SQL migrations and connection setup
//! - [`sqlite`]: SqliteStore implementation (auto-increment ids)

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{CommentStore, PostStore, SocialStore};
