//! SQLite implementation of [`SocialStore`].
//!
//! [`SqliteStore`] keeps posts and comments in two tables (see
//! `migrations/001_initial_schema.sql`). Ids come from
//! `INTEGER PRIMARY KEY AUTOINCREMENT`, so they start at 1 and are never
//! reused ([`IdPolicy::AutoIncrement`]). Each method is a single statement
//! (or a read followed by a single statement); nothing spans a transaction.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use socials_core::{Comment, CommentId, IdPolicy, Post, PostId};

use crate::error::StorageError;
use crate::traits::{CommentStore, PostStore, SocialStore};

/// SQLite-backed implementation of [`SocialStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn row_to_post(row: &Row<'_>) -> rusqlite::Result<Post> {
        Ok(Post {
            id: PostId(row.get(0)?),
            body: row.get(1)?,
        })
    }

    fn row_to_comment(row: &Row<'_>) -> rusqlite::Result<Comment> {
        Ok(Comment {
            id: CommentId(row.get(0)?),
            post_id: PostId(row.get(1)?),
            comment: row.get(2)?,
        })
    }

    /// Maps a foreign-key failure to [`StorageError::IntegrityError`].
    fn constraint_to_integrity(err: rusqlite::Error, reason: String) -> StorageError {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StorageError::IntegrityError { reason },
            _ => StorageError::Sqlite(err),
        }
    }
}

impl PostStore for SqliteStore {
    fn insert_post(&mut self, body: &str) -> Result<Post, StorageError> {
        self.conn
            .execute("INSERT INTO posts (body) VALUES (?1)", params![body])?;
        let id = PostId(self.conn.last_insert_rowid());
        Ok(Post::new(id, body))
    }

    fn get_post(&self, id: PostId) -> Result<Post, StorageError> {
        self.conn
            .query_row(
                "SELECT id, body FROM posts WHERE id = ?1",
                params![id.0],
                Self::row_to_post,
            )
            .optional()?
            .ok_or(StorageError::PostNotFound(id.0))
    }

    fn post_exists(&self, id: PostId) -> Result<bool, StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn list_posts(&self) -> Result<Vec<Post>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, body FROM posts ORDER BY id")?;
        let posts = stmt
            .query_map([], Self::row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    fn update_post(&mut self, id: PostId, body: &str) -> Result<Post, StorageError> {
        let changed = self.conn.execute(
            "UPDATE posts SET body = ?1 WHERE id = ?2",
            params![body, id.0],
        )?;
        if changed == 0 {
            return Err(StorageError::PostNotFound(id.0));
        }
        Ok(Post::new(id, body))
    }

    fn delete_post(&mut self, id: PostId) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1", params![id.0])
            .map_err(|e| {
                Self::constraint_to_integrity(e, format!("post {} still has comments", id))
            })?;
        if changed == 0 {
            return Err(StorageError::PostNotFound(id.0));
        }
        Ok(())
    }
}

impl CommentStore for SqliteStore {
    fn insert_comment(&mut self, post_id: PostId, comment: &str) -> Result<Comment, StorageError> {
        if !self.post_exists(post_id)? {
            return Err(StorageError::PostNotFound(post_id.0));
        }
        self.conn
            .execute(
                "INSERT INTO comments (comment, post_id) VALUES (?1, ?2)",
                params![comment, post_id.0],
            )
            .map_err(|e| {
                Self::constraint_to_integrity(e, format!("post {} does not exist", post_id))
            })?;
        let id = CommentId(self.conn.last_insert_rowid());
        Ok(Comment::new(id, post_id, comment))
    }

    fn get_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, StorageError> {
        self.conn
            .query_row(
                "SELECT id, post_id, comment FROM comments WHERE id = ?1 AND post_id = ?2",
                params![comment_id.0, post_id.0],
                Self::row_to_comment,
            )
            .optional()?
            .ok_or(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            })
    }

    fn comment_exists(&self, comment_id: CommentId) -> Result<bool, StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = ?1)",
            params![comment_id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn find_comments_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, post_id, comment FROM comments WHERE post_id = ?1 ORDER BY id",
        )?;
        let comments = stmt
            .query_map(params![post_id.0], Self::row_to_comment)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    fn list_comments(&self) -> Result<Vec<Comment>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, post_id, comment FROM comments ORDER BY post_id, id")?;
        let comments = stmt
            .query_map([], Self::row_to_comment)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    fn update_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        comment: &str,
    ) -> Result<Comment, StorageError> {
        let changed = self.conn.execute(
            "UPDATE comments SET comment = ?1 WHERE id = ?2 AND post_id = ?3",
            params![comment, comment_id.0, post_id.0],
        )?;
        if changed == 0 {
            return Err(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            });
        }
        Ok(Comment::new(comment_id, post_id, comment))
    }

    fn delete_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<(), StorageError> {
        let changed = self.conn.execute(
            "DELETE FROM comments WHERE id = ?1 AND post_id = ?2",
            params![comment_id.0, post_id.0],
        )?;
        if changed == 0 {
            return Err(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            });
        }
        Ok(())
    }

    fn delete_comments_by_post(&mut self, post_id: PostId) -> Result<usize, StorageError> {
        let removed = self
            .conn
            .execute("DELETE FROM comments WHERE post_id = ?1", params![post_id.0])?;
        Ok(removed)
    }
}

impl SocialStore for SqliteStore {
    fn id_policy(&self) -> IdPolicy {
        IdPolicy::AutoIncrement
    }
}
