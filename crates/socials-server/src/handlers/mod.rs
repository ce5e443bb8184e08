//! HTTP handler modules for the socials API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`SocialService`](crate::service::SocialService),
//! and return JSON responses. No business logic lives in handlers.

pub mod comments;
pub mod posts;

use axum::Json;

/// Greeting on the root path.
///
/// `GET /`
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World!" }))
}
