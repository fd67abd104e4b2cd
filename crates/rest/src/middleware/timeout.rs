//! Request timeout rendering.
//!
//! The tower-http timeout layer answers with a bare status and an empty
//! body. This middleware sits outside it and turns that answer into the
//! regular error envelope, with the status chosen like any other failure
//! on the same route.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::RestError;

/// Status the timeout layer is configured to answer with. Handlers never
/// produce it themselves.
pub const TIMEOUT_STATUS: StatusCode = StatusCode::GATEWAY_TIMEOUT;

/// Settings the middleware needs to describe a timeout.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutSettings {
    /// The configured request timeout in seconds.
    pub seconds: u64,
    /// Whether failed document calls are answered with 200.
    pub legacy_status: bool,
}

/// Returns `true` for the single-document routes.
pub fn is_document_path(path: &str) -> bool {
    path.starts_with("/index/")
}

/// Middleware function rewriting timed out requests into error envelopes.
///
/// This can be used with `axum::middleware::from_fn_with_state`.
pub async fn timeout_envelope_middleware(
    State(settings): State<TimeoutSettings>,
    request: Request,
    next: Next,
) -> Response {
    let document = is_document_path(request.uri().path());
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    if response.status() != TIMEOUT_STATUS {
        return response;
    }

    warn!(path = %path, seconds = settings.seconds, "Request timed out");

    RestError::Timeout {
        seconds: settings.seconds,
        document,
        legacy_status: settings.legacy_status,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_document_path() {
        assert!(is_document_path("/index/42"));
        assert!(!is_document_path("/health"));
        assert!(!is_document_path("/"));
        assert!(!is_document_path("/indexes"));
    }
}
