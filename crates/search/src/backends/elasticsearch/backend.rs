//! Elasticsearch backend implementation.

use crate::backends::client::client_backend;

client_backend! {
    /// Search backend talking to an Elasticsearch cluster.
    ElasticsearchBackend {
        client: elasticsearch::Elasticsearch,
        kind: Elasticsearch,
        name: "elasticsearch",
    }
}
