//! Document delete handler: `DELETE /index/{id}`.

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

/// Handler for deleting a document.
///
/// # HTTP Request
///
/// `DELETE /index/{id}`
///
/// # Response
///
/// - `200 OK` - The backend's deletion result (`"result": "deleted"`)
/// - `404 Not Found` - No such document (error envelope)
/// - `502`/`503` - Backend failure (error envelope)
pub async fn delete_handler<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    B: SearchBackend,
{
    debug!(index = %state.index(), id = %id, "Processing delete request");

    let result = state
        .backend()
        .delete(state.index(), &id)
        .await
        .map_err(|e| {
            debug!(id = %id, error = %e, "Delete failed");
            RestError::document(e, state.legacy_error_status())
        })?;

    debug!(id = %id, "Document deleted");

    Ok((StatusCode::OK, Json(result)).into_response())
}
