//! Error types for the Bonsai API.
//!
//! Every failure is rendered as the error envelope
//! `{"error": {"type": "...", "message": "..."}}`.
//!
//! # Error Mapping
//!
//! Backend errors on document routes map to HTTP status codes:
//!
//! | Backend Error | HTTP Status |
//! |--------------|-------------|
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Rejected | 400 |
//! | Unauthorized | 502 |
//! | Status | 502 |
//! | Transport | 503 |
//! | Configuration | 500 |
//!
//! A document request cut off by the request timeout is sent with 504 and
//! the type `TimeoutError`.
//!
//! With `legacy_error_status` enabled, document errors are sent with 200.
//! Failures of the introspection routes (`/info`, `/health`) are always 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bonsai_search::BackendError;
use serde_json::Value;
use thiserror::Error;

/// The error type for request handlers.
#[derive(Debug, Error)]
pub enum RestError {
    /// A document call (get, create, delete) failed.
    #[error("document operation failed: {source}")]
    Document {
        /// The backend failure.
        #[source]
        source: BackendError,
        /// Answer with 200 instead of the matching status.
        legacy_status: bool,
    },

    /// A cluster introspection call failed.
    #[error("cluster call failed: {0}")]
    Cluster(#[source] BackendError),

    /// The request did not complete within the request timeout.
    #[error("request did not complete within {seconds}s")]
    Timeout {
        /// The configured timeout.
        seconds: u64,
        /// Whether the request targeted a document route.
        document: bool,
        /// Answer with 200 instead of the matching status.
        legacy_status: bool,
    },
}

/// Result alias for request handlers.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Wraps a failed document call.
    pub fn document(source: BackendError, legacy_status: bool) -> Self {
        RestError::Document {
            source,
            legacy_status,
        }
    }

    /// Returns the HTTP status this error is sent with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Document {
                legacy_status: true,
                ..
            } => StatusCode::OK,
            RestError::Document { source, .. } => document_status(source),
            RestError::Timeout {
                document: true,
                legacy_status: true,
                ..
            } => StatusCode::OK,
            RestError::Timeout { document: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            RestError::Cluster(_) | RestError::Timeout { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the envelope `type` for this error.
    pub fn error_type(&self) -> &'static str {
        match self.backend_error() {
            Some(source) => source.error_type(),
            None => "TimeoutError",
        }
    }

    /// Returns the envelope `message` for this error.
    pub fn message(&self) -> String {
        match self.backend_error() {
            Some(source) => source.to_string(),
            None => self.to_string(),
        }
    }

    /// Returns the backend failure behind this error, if any.
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            RestError::Document { source, .. } | RestError::Cluster(source) => Some(source),
            RestError::Timeout { .. } => None,
        }
    }
}

/// Maps a backend failure on a document route to an HTTP status.
pub fn document_status(error: &BackendError) -> StatusCode {
    match error {
        BackendError::NotFound { .. } => StatusCode::NOT_FOUND,
        BackendError::Conflict { .. } => StatusCode::CONFLICT,
        BackendError::Rejected { .. } => StatusCode::BAD_REQUEST,
        BackendError::Unauthorized { .. } | BackendError::Status { .. } => StatusCode::BAD_GATEWAY,
        BackendError::Transport { .. } => StatusCode::SERVICE_UNAVAILABLE,
        BackendError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the error envelope body.
pub fn error_envelope(error_type: &str, message: &str) -> Value {
    serde_json::json!({
        "error": {
            "type": error_type,
            "message": message
        }
    })
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = error_envelope(self.error_type(), &self.message());
        (status, Json(body)).into_response()
    }
}
