use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use usersvc_core::storage::{repository_error_to_status_code, RepositoryError};
use usersvc_core::user::ValidationErrors;

/// Message returned for every server-side failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Everything a user request can fail with.
///
/// Client errors carry the fixed message the caller sees. Server errors carry
/// the underlying cause, which is logged and never sent back.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{message}")]
    Validation {
        message: &'static str,
        #[source]
        details: Option<ValidationErrors>,
    },
    /// The `{id}` path segment could not be extracted (e.g. invalid UTF-8).
    #[error("Invalid user ID")]
    InvalidPath(#[source] PathRejection),
    /// No user stored under the requested ID.
    #[error("User not found")]
    NotFound,
    /// Unsupported HTTP verb.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// No route for the requested path.
    #[error("Not found")]
    UnknownRoute,
    /// The backend failed.
    #[error("Storage error: {0}")]
    Storage(#[source] RepositoryError),
    /// The response body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// A 400 with a fixed message.
    pub fn bad_request(message: &'static str) -> Self {
        ApiError::Validation {
            message,
            details: None,
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::Storage(err)
        }
    }
}

/// JSON error body: `{"error": "<message>"}`.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            return error_response(status, INTERNAL_SERVER_ERROR);
        }

        match &self {
            ApiError::Validation {
                details: Some(details),
                ..
            } => tracing::warn!(status = %status, error = %details, "Rejected request"),
            _ => tracing::warn!(status = %status, error = %self, "Rejected request"),
        }

        error_response(status, &self.to_string())
    }
}
