//! Cluster introspection handlers.
//!
//! `/info` and `/health` return the backend payloads unchanged. Their
//! failures are not turned into document errors; they surface as 500.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bonsai_search::SearchBackend;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the root endpoint.
///
/// # HTTP Request
///
/// `GET /`
pub async fn root_handler<B>(State(state): State<AppState<B>>) -> String
where
    B: SearchBackend,
{
    welcome_message(&state.backend().kind().to_string())
}

/// The plain-text greeting served at `/`.
pub fn welcome_message(backend_kind: &str) -> String {
    format!(
        "Welcome to the bonsai API with {} backend. Try /health endpoint",
        backend_kind
    )
}

/// Handler for the cluster info endpoint.
///
/// # HTTP Request
///
/// `GET /info`
///
/// # Response
///
/// - `200 OK` - The backend's info payload (name, cluster name, version, ...)
/// - `500 Internal Server Error` - The backend call failed
pub async fn info_handler<B>(State(state): State<AppState<B>>) -> RestResult<Response>
where
    B: SearchBackend,
{
    debug!(backend = state.backend().backend_name(), "Processing info request");

    let info = state.backend().info().await.map_err(RestError::Cluster)?;

    Ok((StatusCode::OK, Json(info)).into_response())
}

/// Handler for the cluster health endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - The backend's cluster health payload (`status`, node counts, ...)
/// - `500 Internal Server Error` - The backend call failed
pub async fn health_handler<B>(State(state): State<AppState<B>>) -> RestResult<Response>
where
    B: SearchBackend,
{
    debug!(backend = state.backend().backend_name(), "Processing health request");

    let health = state.backend().health().await.map_err(RestError::Cluster)?;

    Ok((StatusCode::OK, Json(health)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_message() {
        assert_eq!(
            welcome_message("opensearch"),
            "Welcome to the bonsai API with opensearch backend. Try /health endpoint"
        );
    }
}
