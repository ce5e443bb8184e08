//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use socials_core::CoreError;
use socials_storage::StorageError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "INVALID_REFERENCE").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Post or comment not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A write referenced a post that does not exist (400).
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Malformed request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request body is well-formed JSON but missing or mistyping fields (422).
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidReference(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ApiErrorDetail {
        let (code, message) = match self {
            ApiError::NotFound(msg) => ("NOT_FOUND", msg),
            ApiError::InvalidReference(msg) => ("INVALID_REFERENCE", msg),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg),
            ApiError::ValidationFailed(msg) => ("VALIDATION_FAILED", msg),
            ApiError::InternalError(msg) => ("INTERNAL_ERROR", msg),
        };
        ApiErrorDetail {
            code: code.to_string(),
            message: message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::InternalError(msg) = &self {
            tracing::error!(error = %msg, "request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": self.detail(),
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { message } => ApiError::NotFound(message),
            CoreError::InvalidReference { message } => ApiError::InvalidReference(message),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::PostNotFound(_) | StorageError::CommentNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            _ => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::ValidationFailed(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => {
                ApiError::ValidationFailed(e.body_text())
            }
            other => ApiError::InternalError(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::ValidationFailed(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_message() {
        let err: ApiError = CoreError::post_not_in_database().into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail().message, "Post id not in database.");

        let err: ApiError = CoreError::comment_on_missing_post().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail().code, "INVALID_REFERENCE");
    }

    #[test]
    fn storage_errors_map_by_kind() {
        let err: ApiError = StorageError::PostNotFound(3).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = StorageError::Migration("boom".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
