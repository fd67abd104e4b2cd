//! Elasticsearch backend.
//!
//! # Example
//!
//! ```ignore
//! use bonsai_search::backends::ConnectionConfig;
//! use bonsai_search::backends::elasticsearch::ElasticsearchBackend;
//! use bonsai_search::SearchBackend;
//!
//! let config = ConnectionConfig {
//!     url: "http://localhost:9200".to_string(),
//!     ..Default::default()
//! };
//! let backend = ElasticsearchBackend::new(config)?;
//! let health = backend.health().await?;
//! ```

mod backend;

pub use backend::ElasticsearchBackend;
