//! Application state with a shared `SocialService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. The async mutex lets handlers await the lock without
//! blocking the runtime. `rusqlite::Connection` is `!Sync`, which rules out an
//! `RwLock` here.

use std::sync::Arc;

use crate::config::{Backend, ServerConfig};
use crate::error::ApiError;
use crate::service::SocialService;

/// Shared application state for the HTTP server.
///
/// Requests are serialized on the service lock, so every check-then-write
/// sequence in the service runs without interleaving.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<SocialService>>,
}

impl AppState {
    /// Creates state for the backend named in `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let service = match &config.backend {
            Backend::Memory => SocialService::in_memory(),
            Backend::Sqlite { path } => SocialService::sqlite(path)?,
        };
        Ok(Self::from_service(service))
    }

    /// Creates state over the in-memory backend (for testing).
    pub fn in_memory() -> Self {
        Self::from_service(SocialService::in_memory())
    }

    /// Creates state over a private in-memory SQLite database (for testing).
    pub fn sqlite_in_memory() -> Result<Self, ApiError> {
        Ok(Self::from_service(SocialService::sqlite_in_memory()?))
    }

    fn from_service(service: SocialService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}
