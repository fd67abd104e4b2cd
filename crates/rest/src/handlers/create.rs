//! Document create handler: `PUT /index/{id}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bonsai_search::{SearchBackend, create_placeholder};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Body sent back when a document was created.
pub const CREATED_BODY: &str = "created";

/// Handler for creating a document.
///
/// Writes the placeholder tweet at `id`, then refreshes the index so the
/// document can be read back immediately.
///
/// # HTTP Request
///
/// `PUT /index/{id}`
///
/// # Response
///
/// - `201 Created` - Body `created` (200 when `legacy_error_status` is set)
/// - `409 Conflict` - A document with this id exists (error envelope)
/// - `502`/`503` - Backend failure (error envelope)
pub async fn create_handler<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    B: SearchBackend,
{
    debug!(index = %state.index(), id = %id, "Processing create request");

    create_placeholder(state.backend(), state.index(), &id)
        .await
        .map_err(|e| {
            debug!(id = %id, error = %e, "Create failed");
            RestError::document(e, state.legacy_error_status())
        })?;

    let status = if state.legacy_error_status() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, CREATED_BODY).into_response())
}
