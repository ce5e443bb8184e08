//! Router assembly for the socials HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! tracing and CORS middleware layers.

use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. Static segments (`all`,
/// `post`) take precedence over the `{id}` capture.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Posts
        .route("/post", post(handlers::posts::create_post))
        .route("/post/all", get(handlers::posts::list_posts))
        .route(
            "/post/all/comments",
            get(handlers::posts::list_posts_with_comments),
        )
        .route(
            "/post/{id}",
            get(handlers::posts::get_post)
                .put(handlers::posts::update_post)
                .delete(handlers::posts::delete_post),
        )
        // Comments
        .route("/comment", post(handlers::comments::create_comment))
        .route("/comment/all", get(handlers::comments::list_all_comments))
        .route(
            "/comment/post/{post_id}",
            delete(handlers::comments::delete_comments_by_post),
        )
        .route(
            "/comment/{id}",
            get(handlers::comments::list_comments_by_post)
                .put(handlers::comments::update_comment)
                .delete(handlers::comments::delete_comment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
