//! The post record.

use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// A top-level post: an id and a text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, body: impl Into<String>) -> Self {
        Post {
            id,
            body: body.into(),
        }
    }
}
