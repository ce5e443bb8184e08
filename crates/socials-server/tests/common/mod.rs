//! Shared helpers for the HTTP integration suites.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`;
//! no network server is started.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use socials_server::router::build_router;
use socials_server::state::AppState;

/// Fresh router over the in-memory (gap-reuse) backend.
pub fn memory_app() -> Router {
    build_router(AppState::in_memory())
}

/// Fresh router over a private in-memory SQLite database.
pub fn sqlite_app() -> Router {
    let state = AppState::sqlite_in_memory().expect("failed to create sqlite AppState");
    build_router(state)
}

/// Sends a request with an optional JSON body and returns (status, json).
pub async fn request_json(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::GET, path, None).await
}

pub async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::POST, path, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::PUT, path, Some(body)).await
}

pub async fn delete_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request_json(app, Method::DELETE, path, None).await
}

/// Creates a post and returns its id.
pub async fn create_post(app: &Router, body: &str) -> i64 {
    let (status, json) = post_json(app, "/post", json!({ "body": body })).await;
    assert_eq!(status, StatusCode::CREATED, "create post failed: {:?}", json);
    json["id"].as_i64().unwrap()
}

/// Creates a comment and returns its id.
pub async fn create_comment(app: &Router, post_id: i64, body: &str) -> i64 {
    let (status, json) = post_json(
        app,
        "/comment",
        json!({ "post_id": post_id, "body": body }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create comment failed: {:?}", json);
    json["comments"][0]["id"].as_i64().unwrap()
}

/// The message of an error envelope.
pub fn error_message(json: &serde_json::Value) -> &str {
    assert_eq!(json["success"], json!(false), "not an error envelope: {:?}", json);
    json["error"]["message"].as_str().unwrap()
}
