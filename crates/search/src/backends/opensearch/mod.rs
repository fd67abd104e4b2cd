//! OpenSearch backend.

mod backend;

pub use backend::OpenSearchBackend;
