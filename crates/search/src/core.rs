//! Backend trait and backend identification.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BackendResult;

/// Identifies the flavour of search engine behind a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Elasticsearch.
    Elasticsearch,
    /// OpenSearch.
    OpenSearch,
}

impl BackendKind {
    /// All supported kinds, in binding selection order.
    pub const ALL: [BackendKind; 2] = [BackendKind::Elasticsearch, BackendKind::OpenSearch];

    /// The service binding key for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Elasticsearch => "elasticsearch",
            BackendKind::OpenSearch => "opensearch",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "elasticsearch" => Ok(BackendKind::Elasticsearch),
            "opensearch" => Ok(BackendKind::OpenSearch),
            other => Err(format!("unknown search backend kind: {}", other)),
        }
    }
}

/// A document search engine reachable over its client library.
///
/// Every method is a single pass-through call. Successful calls return the
/// backend's JSON response body unchanged; failed calls are classified into
/// [`BackendError`](crate::error::BackendError) variants.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Returns which engine this backend talks to.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Fetches the cluster/server info payload (`GET /`).
    async fn info(&self) -> BackendResult<Value>;

    /// Fetches the cluster health payload (`GET /_cluster/health`).
    async fn health(&self) -> BackendResult<Value>;

    /// Fetches a document by id, returning the backend's get representation.
    ///
    /// # Errors
    ///
    /// * `BackendError::NotFound` - If the document or the index does not exist
    async fn get(&self, index: &str, id: &str) -> BackendResult<Value>;

    /// Creates a document at the given id.
    ///
    /// # Errors
    ///
    /// * `BackendError::Conflict` - If a document with this id already exists
    async fn create(&self, index: &str, id: &str, document: Value) -> BackendResult<Value>;

    /// Deletes a document by id, returning the backend's deletion result.
    ///
    /// # Errors
    ///
    /// * `BackendError::NotFound` - If the document does not exist
    async fn delete(&self, index: &str, id: &str) -> BackendResult<Value>;

    /// Makes all writes to `index` visible to subsequent reads.
    async fn refresh(&self, index: &str) -> BackendResult<Value>;
}
