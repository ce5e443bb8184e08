//! HTTP/JSON API server for social posts and comments.
//!
//! Exposes REST endpoints to create, read, update and delete posts and their
//! comments over a swappable storage backend. This crate contains the
//! service rules, configuration, API schema types, error handling, and route
//! definitions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
