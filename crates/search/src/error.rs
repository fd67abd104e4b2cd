//! Error types for the search layer.
//!
//! Backend calls never raise; every failure is returned as a [`BackendError`]
//! so the HTTP layer can decide how to present it. Binding discovery has its
//! own [`BindingError`] because it is only ever fatal at startup.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use serde_json::Value;
use thiserror::Error;

/// Result alias for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// A failed call against the search backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The document or index does not exist (backend status 404).
    #[error("document not found: {index}/{id}{}", reason_suffix(.body))]
    NotFound { index: String, id: String, body: Value },

    /// A document with this id already exists (backend status 409).
    #[error("document already exists: {index}/{id}{}", reason_suffix(.body))]
    Conflict { index: String, id: String, body: Value },

    /// The backend rejected the request as malformed (backend status 400).
    #[error("request rejected by {backend_name} ({status}): {body}")]
    Rejected {
        backend_name: String,
        status: u16,
        body: Value,
    },

    /// The backend refused our credentials (backend status 401 or 403).
    #[error("{backend_name} denied access ({status}): {body}")]
    Unauthorized {
        backend_name: String,
        status: u16,
        body: Value,
    },

    /// Any other non-success status returned by the backend.
    #[error("{backend_name} returned status {status}: {body}")]
    Status {
        backend_name: String,
        status: u16,
        body: Value,
    },

    /// The request never produced a usable response.
    #[error("{backend_name} request failed: {message}")]
    Transport {
        backend_name: String,
        message: String,
    },

    /// The client could not be built from the given connection settings.
    #[error("invalid {backend_name} connection settings: {message}")]
    Configuration {
        backend_name: String,
        message: String,
    },
}

impl BackendError {
    /// Short, stable name of the error kind, echoed in error envelopes.
    ///
    /// The names follow the exception classes of the official Python clients
    /// so existing consumers of the envelope keep matching on them.
    pub fn error_type(&self) -> &'static str {
        match self {
            BackendError::NotFound { .. } => "NotFoundError",
            BackendError::Conflict { .. } => "ConflictError",
            BackendError::Rejected { .. } => "RequestError",
            BackendError::Unauthorized { status: 401, .. } => "AuthenticationException",
            BackendError::Unauthorized { .. } => "AuthorizationException",
            BackendError::Status { .. } => "TransportError",
            BackendError::Transport { .. } => "ConnectionError",
            BackendError::Configuration { .. } => "ConfigurationError",
        }
    }

    /// The HTTP status the backend answered with, when there was one.
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            BackendError::NotFound { .. } => Some(404),
            BackendError::Conflict { .. } => Some(409),
            BackendError::Rejected { status, .. }
            | BackendError::Unauthorized { status, .. }
            | BackendError::Status { status, .. } => Some(*status),
            BackendError::Transport { .. } | BackendError::Configuration { .. } => None,
        }
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound { .. })
    }

    pub(crate) fn transport(backend_name: &str, message: impl Into<String>) -> Self {
        BackendError::Transport {
            backend_name: backend_name.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn configuration(backend_name: &str, message: impl Into<String>) -> Self {
        BackendError::Configuration {
            backend_name: backend_name.to_string(),
            message: message.into(),
        }
    }
}

/// Renders the backend's reason for a failure as ` (type: reason)`.
///
/// Falls back to a bare error string or the `result` field (delete answers
/// `not_found`); a plain `found: false` body adds nothing.
fn reason_suffix(body: &Value) -> String {
    let error = &body["error"];
    match (error["type"].as_str(), error["reason"].as_str()) {
        (Some(kind), Some(reason)) => format!(" ({}: {})", kind, reason),
        (Some(kind), None) => format!(" ({})", kind),
        _ => match error.as_str().or_else(|| body["result"].as_str()) {
            Some(reason) => format!(" ({})", reason),
            None => String::new(),
        },
    }
}

/// Errors raised while discovering the search service binding.
#[derive(Error, Debug)]
pub enum BindingError {
    /// The bindings environment variable is not set.
    #[error("{variable} is not set; the service is not bound to any backing service")]
    MissingBindings { variable: String },

    /// The bindings document is not valid JSON of the expected shape.
    #[error("invalid service bindings document: {message}")]
    InvalidDocument { message: String },

    /// Neither an elasticsearch nor an opensearch binding is present.
    #[error("not bound to elasticsearch or opensearch (found: {found:?})")]
    NoSearchBinding { found: Vec<String> },

    /// The binding kind is present but lists no service instances.
    #[error("binding '{kind}' has no service instances")]
    EmptyBinding { kind: String },

    /// The binding credentials carry no usable connection URI.
    #[error("binding '{kind}' has an invalid uri: {message}")]
    InvalidUri { kind: String, message: String },
}
