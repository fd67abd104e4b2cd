//! Application state for the Bonsai API.
//!
//! The backend and the configuration are built once at startup and shared
//! with every handler through axum's `State` extractor.

use std::sync::Arc;

use bonsai_search::SearchBackend;

use crate::config::ServerConfig;

/// Shared application state.
///
/// # Type Parameters
///
/// * `B` - The search backend type (must implement [`SearchBackend`])
///
/// # Example
///
/// ```rust,ignore
/// use bonsai_rest::{AppState, ServerConfig};
/// use bonsai_search::backends::{ConnectionConfig, opensearch::OpenSearchBackend};
/// use std::sync::Arc;
///
/// let backend = OpenSearchBackend::new(ConnectionConfig::default())?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<B> {
    /// The search backend.
    backend: Arc<B>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since B is wrapped in Arc and doesn't need to be Clone
impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: Arc::clone(&self.config),
        }
    }
}

impl<B: SearchBackend> AppState<B> {
    /// Creates a new AppState with the given backend and configuration.
    pub fn new(backend: Arc<B>, config: ServerConfig) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the search backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a clone of the backend Arc.
    pub fn backend_arc(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the index the document routes operate on.
    pub fn index(&self) -> &str {
        &self.config.index
    }

    /// Returns whether failed document calls are answered with 200.
    pub fn legacy_error_status(&self) -> bool {
        self.config.legacy_error_status
    }
}
