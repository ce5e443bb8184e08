//! Id newtypes for posts and comments, plus the id assignment policies.
//!
//! Both ids wrap an `i64` so they line up with SQLite's `INTEGER PRIMARY KEY`
//! and serialize as bare JSON numbers.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub i64);

/// Comment identifier.
///
/// Scoped to the owning post's comment list under [`IdPolicy::GapReuse`],
/// globally unique under [`IdPolicy::AutoIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommentId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a store hands out ids for new records.
///
/// A backend uses exactly one policy for both posts and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Use the record count as the id when it is free, else `max + 1`.
    /// Ids start at 0 and gaps under the count get reused.
    GapReuse,
    /// Delegate to the storage engine's auto-increment. Ids start at 1 and
    /// are never reused.
    AutoIncrement,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::GapReuse => write!(f, "gap-reuse"),
            IdPolicy::AutoIncrement => write!(f, "auto-increment"),
        }
    }
}

/// Picks the next id under [`IdPolicy::GapReuse`].
///
/// With no existing ids the result is 0. Otherwise the candidate is the
/// number of existing ids; if that candidate is taken, the result is one past
/// the current maximum.
pub fn gap_reuse_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let ids: HashSet<i64> = existing.into_iter().collect();
    let candidate = ids.len() as i64;
    if !ids.contains(&candidate) {
        return candidate;
    }
    ids.iter().max().map_or(0, |max| max + 1)
}
