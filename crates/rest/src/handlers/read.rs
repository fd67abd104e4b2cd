//! Document read handler: `GET /index/{id}`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bonsai_search::SearchBackend;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for reading a document.
///
/// Returns the backend's get representation verbatim (`_index`, `_id`,
/// `_version`, `found`, `_source`, ...).
///
/// # HTTP Request
///
/// `GET /index/{id}`
///
/// # Response
///
/// - `200 OK` - Document found
/// - `404 Not Found` - No such document (error envelope)
/// - `502`/`503` - Backend failure (error envelope)
///
/// # Example
///
/// ```http
/// GET /index/42 HTTP/1.1
/// Host: bonsai.example.com
/// ```
pub async fn read_handler<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    B: SearchBackend,
{
    debug!(index = %state.index(), id = %id, "Processing read request");

    let document = state
        .backend()
        .get(state.index(), &id)
        .await
        .map_err(|e| {
            debug!(id = %id, error = %e, "Read failed");
            RestError::document(e, state.legacy_error_status())
        })?;

    Ok((StatusCode::OK, Json(document)).into_response())
}
