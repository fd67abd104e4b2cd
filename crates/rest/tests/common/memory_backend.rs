//! In-memory search backend.
//!
//! Answers with the same response shapes a real cluster produces, so the
//! HTTP layer can be exercised without Docker.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bonsai_search::{BackendError, BackendKind, BackendResult, SearchBackend};
use parking_lot::RwLock;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct StoredDocument {
    source: Value,
    version: u64,
    seq_no: u64,
}

/// A single-node cluster held in memory.
#[derive(Debug)]
pub struct MemoryBackend {
    kind: BackendKind,
    indices: RwLock<HashMap<String, HashMap<String, StoredDocument>>>,
    next_seq_no: AtomicUsize,
    refreshes: AtomicUsize,
    unavailable: AtomicBool,
    delay_ms: AtomicU64,
}

impl MemoryBackend {
    /// Creates an empty backend reporting itself as `kind`.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            indices: RwLock::new(HashMap::new()),
            next_seq_no: AtomicUsize::new(0),
            refreshes: AtomicUsize::new(0),
            unavailable: AtomicBool::new(false),
            delay_ms: AtomicU64::new(0),
        }
    }

    /// Makes every subsequent call fail as if the node were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delays every subsequent call, as a slow node would.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of refresh calls received so far.
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Number of documents stored in `index`.
    pub fn document_count(&self, index: &str) -> usize {
        self.indices.read().get(index).map_or(0, HashMap::len)
    }

    async fn enter(&self) -> BackendResult<()> {
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::Transport {
                backend_name: self.backend_name().to_string(),
                message: "error sending request: connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SearchBackend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn info(&self) -> BackendResult<Value> {
        self.enter().await?;
        Ok(json!({
            "name": "memory-node-1",
            "cluster_name": "memory",
            "version": {
                "distribution": self.kind.as_str(),
                "number": "8.15.0"
            },
            "tagline": "You Know, for Search"
        }))
    }

    async fn health(&self) -> BackendResult<Value> {
        self.enter().await?;
        Ok(json!({
            "cluster_name": "memory",
            "status": "green",
            "timed_out": false,
            "number_of_nodes": 1,
            "number_of_data_nodes": 1,
            "active_shards": self.indices.read().len()
        }))
    }

    async fn get(&self, index: &str, id: &str) -> BackendResult<Value> {
        self.enter().await?;
        let indices = self.indices.read();

        let Some(documents) = indices.get(index) else {
            return Err(BackendError::NotFound {
                index: index.to_string(),
                id: id.to_string(),
                body: json!({
                    "error": {
                        "type": "index_not_found_exception",
                        "reason": format!("no such index [{}]", index),
                        "index": index
                    },
                    "status": 404
                }),
            });
        };

        match documents.get(id) {
            Some(doc) => Ok(json!({
                "_index": index,
                "_id": id,
                "_version": doc.version,
                "_seq_no": doc.seq_no,
                "_primary_term": 1,
                "found": true,
                "_source": doc.source
            })),
            None => Err(BackendError::NotFound {
                index: index.to_string(),
                id: id.to_string(),
                body: json!({"_index": index, "_id": id, "found": false}),
            }),
        }
    }

    async fn create(&self, index: &str, id: &str, document: Value) -> BackendResult<Value> {
        self.enter().await?;
        let mut indices = self.indices.write();
        let documents = indices.entry(index.to_string()).or_default();

        if documents.contains_key(id) {
            return Err(BackendError::Conflict {
                index: index.to_string(),
                id: id.to_string(),
                body: json!({
                    "error": {
                        "type": "version_conflict_engine_exception",
                        "reason": format!(
                            "[{}]: version conflict, document already exists (current version [1])",
                            id
                        )
                    },
                    "status": 409
                }),
            });
        }

        let seq_no = self.next_seq_no.fetch_add(1, Ordering::SeqCst) as u64;
        documents.insert(
            id.to_string(),
            StoredDocument {
                source: document,
                version: 1,
                seq_no,
            },
        );

        Ok(json!({
            "_index": index,
            "_id": id,
            "_version": 1,
            "result": "created",
            "_seq_no": seq_no,
            "_primary_term": 1
        }))
    }

    async fn delete(&self, index: &str, id: &str) -> BackendResult<Value> {
        self.enter().await?;
        let mut indices = self.indices.write();

        let removed = indices
            .get_mut(index)
            .and_then(|documents| documents.remove(id));

        match removed {
            Some(doc) => {
                let seq_no = self.next_seq_no.fetch_add(1, Ordering::SeqCst) as u64;
                Ok(json!({
                    "_index": index,
                    "_id": id,
                    "_version": doc.version + 1,
                    "result": "deleted",
                    "_shards": {"total": 1, "successful": 1, "failed": 0},
                    "_seq_no": seq_no,
                    "_primary_term": 1
                }))
            }
            None => Err(BackendError::NotFound {
                index: index.to_string(),
                id: id.to_string(),
                body: json!({"_index": index, "_id": id, "result": "not_found"}),
            }),
        }
    }

    async fn refresh(&self, _index: &str) -> BackendResult<Value> {
        self.enter().await?;
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"_shards": {"total": 1, "successful": 1, "failed": 0}}))
    }
}
