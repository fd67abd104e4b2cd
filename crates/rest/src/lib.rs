//! # bonsai-rest - HTTP API over a search cluster
//!
//! A thin HTTP façade over an Elasticsearch- or OpenSearch-compatible
//! backend: cluster introspection plus single-document access on one index.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bonsai_rest::{create_app_with_config, ServerConfig};
//! use bonsai_search::backends::{ConnectionConfig, elasticsearch::ElasticsearchBackend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = ElasticsearchBackend::new(ConnectionConfig::default())?;
//!     let config = ServerConfig::default();
//!
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | welcome | GET | `/` |
//! | cluster info | GET | `/info` |
//! | cluster health | GET | `/health` |
//! | read | GET | `/index/{id}` |
//! | create | PUT | `/index/{id}` |
//! | delete | DELETE | `/index/{id}` |
//!
//! ## Error Handling
//!
//! Failures are returned as `{"error": {"type": ..., "message": ...}}`; see
//! [`error`] for the status code mapping.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the error envelope
//! - [`config`] - Server configuration
//! - [`state`] - Application state (backend, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - HTTP middleware (timeout rendering)
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use crate::middleware::{TIMEOUT_STATUS, TimeoutSettings, timeout_envelope_middleware};
use bonsai_search::{SENTINEL_ID, SearchBackend, create_placeholder};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, info};

/// Creates the Axum application with default configuration.
pub fn create_app<B>(backend: B) -> Router
where
    B: SearchBackend + 'static,
{
    create_app_with_config(backend, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use bonsai_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<B>(backend: B, config: ServerConfig) -> Router
where
    B: SearchBackend + 'static,
{
    create_app_with_shared(Arc::new(backend), config)
}

/// Creates the Axum application around an already shared backend.
pub fn create_app_with_shared<B>(backend: Arc<B>, config: ServerConfig) -> Router
where
    B: SearchBackend + 'static,
{
    info!(
        backend = backend.backend_name(),
        index = %config.index,
        "Creating API server"
    );

    let state = AppState::new(backend, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            TIMEOUT_STATUS,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let timeout_settings = TimeoutSettings {
        seconds: config.request_timeout,
        legacy_status: config.legacy_error_status,
    };

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router
        .layer(service_builder)
        .layer(axum::middleware::from_fn_with_state(
            timeout_settings,
            timeout_envelope_middleware,
        ))
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    use axum::http::Method;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Writes the sentinel document so the index exists before the first
/// request. Failures (typically: the sentinel already exists) are ignored.
pub async fn bootstrap_index<B>(backend: &B, index: &str)
where
    B: SearchBackend + ?Sized,
{
    match create_placeholder(backend, index, SENTINEL_ID).await {
        Ok(()) => info!(index = %index, "Index bootstrapped with sentinel document"),
        Err(e) => debug!(index = %index, error = %e, "Index bootstrap skipped"),
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bonsai={level},bonsai_rest={level},bonsai_search={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
