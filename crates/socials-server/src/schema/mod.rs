//! API schema types for request/response definitions.
//!
//! Entity payloads (`Post`, `PostComments`) are serialized straight from
//! socials-core; the types here cover request bodies and the message-style
//! responses of delete endpoints.

pub mod comments;
pub mod common;
pub mod posts;
