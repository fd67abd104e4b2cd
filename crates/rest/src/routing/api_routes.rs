//! API route configuration.

use axum::{Router, routing::get};
use bonsai_search::SearchBackend;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## Cluster
/// - `GET /` - Welcome text naming the backend kind
/// - `GET /info` - Backend info
/// - `GET /health` - Backend cluster health
///
/// ## Documents
/// - `GET /index/{id}` - Read
/// - `PUT /index/{id}` - Create placeholder
/// - `DELETE /index/{id}` - Delete
pub fn create_routes<B>(state: AppState<B>) -> Router
where
    B: SearchBackend + 'static,
{
    Router::new()
        // Cluster routes
        .route("/", get(handlers::root_handler::<B>))
        .route("/info", get(handlers::info_handler::<B>))
        .route("/health", get(handlers::health_handler::<B>))
        // Document routes
        .route(
            "/index/{id}",
            get(handlers::read_handler::<B>)
                .put(handlers::create_handler::<B>)
                .delete(handlers::delete_handler::<B>),
        )
        // State
        .with_state(state)
}
