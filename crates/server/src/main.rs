//! Bonsai
//!
//! HTTP API over an Elasticsearch or OpenSearch cluster, bound through the
//! platform's `VCAP_SERVICES` document.

use std::sync::Arc;

use bonsai_rest::{ServerConfig, bootstrap_index, create_app_with_shared, init_logging};
use bonsai_search::backends::ConnectionConfig;
use bonsai_search::binding::{BINDINGS_ENV, SearchBinding, ServiceBindings};
use bonsai_search::{BackendKind, BindingError, SearchBackend};
use clap::Parser;
use tracing::info;

/// Selects the search binding from the configured bindings document.
fn discover_binding(config: &ServerConfig) -> Result<SearchBinding, BindingError> {
    let raw = config
        .vcap_services
        .as_deref()
        .ok_or_else(|| BindingError::MissingBindings {
            variable: BINDINGS_ENV.to_string(),
        })?;
    ServiceBindings::from_json(raw)?.select()
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bootstraps the index and serves the API over `backend`.
async fn run<B>(backend: B, config: ServerConfig) -> anyhow::Result<()>
where
    B: SearchBackend + 'static,
{
    let backend = Arc::new(backend);

    if !config.skip_bootstrap {
        bootstrap_index(backend.as_ref(), &config.index).await;
    }

    let app = create_app_with_shared(backend, config.clone());
    serve(app, &config).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let binding = match discover_binding(&config) {
        Ok(binding) => binding,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        backend = %binding.kind,
        service = binding.name.as_deref().unwrap_or("-"),
        uri = %binding.redacted_uri(),
        "Search backend host is {}",
        binding.hostname
    );

    let connection = ConnectionConfig::from_binding(&binding)
        .with_request_timeout_ms(config.backend_timeout_ms)
        .with_certificate_validation(!config.disable_certificate_validation);

    info!(
        port = config.port,
        host = %config.host,
        index = %config.index,
        "Starting Bonsai"
    );

    match binding.kind {
        BackendKind::Elasticsearch => start_elasticsearch(connection, config).await,
        BackendKind::OpenSearch => start_opensearch(connection, config).await,
    }
}

/// Starts the server against an Elasticsearch cluster.
#[cfg(feature = "elasticsearch")]
async fn start_elasticsearch(
    connection: ConnectionConfig,
    config: ServerConfig,
) -> anyhow::Result<()> {
    use bonsai_search::backends::elasticsearch::ElasticsearchBackend;

    let backend = ElasticsearchBackend::new(connection)?;
    run(backend, config).await
}

/// Fallback when the elasticsearch feature is not enabled.
#[cfg(not(feature = "elasticsearch"))]
async fn start_elasticsearch(
    _connection: ConnectionConfig,
    _config: ServerConfig,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "The elasticsearch backend requires the 'elasticsearch' feature. \
         Build with: cargo build -p bonsai-server --features elasticsearch"
    )
}

/// Starts the server against an OpenSearch cluster.
#[cfg(feature = "opensearch")]
async fn start_opensearch(connection: ConnectionConfig, config: ServerConfig) -> anyhow::Result<()> {
    use bonsai_search::backends::opensearch::OpenSearchBackend;

    let backend = OpenSearchBackend::new(connection)?;
    run(backend, config).await
}

/// Fallback when the opensearch feature is not enabled.
#[cfg(not(feature = "opensearch"))]
async fn start_opensearch(
    _connection: ConnectionConfig,
    _config: ServerConfig,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "The opensearch backend requires the 'opensearch' feature. \
         Build with: cargo build -p bonsai-server --features opensearch"
    )
}

#[cfg(not(any(feature = "elasticsearch", feature = "opensearch")))]
compile_error!("At least one search backend feature must be enabled");
