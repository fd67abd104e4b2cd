//! Common test utilities for API testing.
//!
//! - [`memory_backend`] - In-memory search backend
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod memory_backend;

use std::sync::Arc;

use axum_test::TestServer;
use bonsai_rest::{AppState, ServerConfig};
use bonsai_search::BackendKind;

use memory_backend::MemoryBackend;

/// Creates a test server over a fresh in-memory backend.
pub fn create_test_server(kind: BackendKind) -> (TestServer, Arc<MemoryBackend>) {
    create_test_server_with_config(kind, ServerConfig::for_testing())
}

/// Creates a test server with a custom configuration.
pub fn create_test_server_with_config(
    kind: BackendKind,
    config: ServerConfig,
) -> (TestServer, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new(kind));
    let state = AppState::new(Arc::clone(&backend), config);
    let app = bonsai_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server over the full application, middleware included.
pub fn create_app_server(
    kind: BackendKind,
    config: ServerConfig,
) -> (TestServer, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new(kind));
    let app = bonsai_rest::create_app_with_shared(Arc::clone(&backend), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}
