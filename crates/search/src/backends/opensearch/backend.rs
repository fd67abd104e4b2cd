//! OpenSearch backend implementation.

use crate::backends::client::client_backend;

client_backend! {
    /// Search backend talking to an OpenSearch cluster.
    OpenSearchBackend {
        client: opensearch::OpenSearch,
        kind: OpenSearch,
        name: "opensearch",
    }
}
