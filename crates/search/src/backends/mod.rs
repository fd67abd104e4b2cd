//! Search backend implementations.
//!
//! Each backend is gated behind a feature flag.
//!
//! | Backend | Feature | Client crate |
//! |---------|---------|--------------|
//! | Elasticsearch | `elasticsearch` | [`elasticsearch`](https://docs.rs/elasticsearch) |
//! | OpenSearch | `opensearch` | [`opensearch`](https://docs.rs/opensearch) |

#[cfg(any(feature = "elasticsearch", feature = "opensearch"))]
mod client;
mod connection;

pub use connection::{BackendAuth, ConnectionConfig};

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

#[cfg(feature = "opensearch")]
pub mod opensearch;
