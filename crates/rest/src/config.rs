//! Server configuration for the Bonsai API.
//!
//! Every setting can be given on the command line or through the
//! environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | 8080 | Server port |
//! | `HOST` | 0.0.0.0 | Host to bind |
//! | `LOG_LEVEL` | info | Log level |
//! | `SEARCH_INDEX` | tweets | Index the document routes operate on |
//! | `REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SEARCH_TIMEOUT_MS` | 10000 | Backend call timeout (milliseconds) |
//! | `SEARCH_INSECURE` | false | Skip TLS certificate validation |
//! | `ENABLE_CORS` | false | Enable CORS |
//! | `CORS_ORIGINS` | * | Allowed origins |
//! | `LEGACY_ERROR_STATUS` | false | Answer failed document calls with 200 |
//! | `SKIP_BOOTSTRAP` | false | Skip the sentinel write at startup |
//! | `VCAP_SERVICES` | | Service bindings document |
//!
//! # Example
//!
//! ```rust
//! use bonsai_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     index: "tweets-test".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use bonsai_search::DEFAULT_INDEX;
use clap::Parser;

/// Server configuration for the Bonsai API.
#[derive(Debug, Clone, Parser)]
#[command(name = "bonsai")]
#[command(about = "HTTP API over an Elasticsearch or OpenSearch cluster")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Index the document routes operate on.
    #[arg(long, env = "SEARCH_INDEX", default_value = DEFAULT_INDEX)]
    pub index: String,

    /// Request timeout in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Timeout for a single backend call in milliseconds.
    ///
    /// A create makes two backend calls, so the request timeout must exceed
    /// twice this value.
    #[arg(long, env = "SEARCH_TIMEOUT_MS", default_value = "10000")]
    pub backend_timeout_ms: u64,

    /// Skip TLS certificate validation towards the backend.
    #[arg(long, env = "SEARCH_INSECURE", default_value = "false")]
    pub disable_certificate_validation: bool,

    /// Enable CORS.
    #[arg(long, env = "ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Answer failed document calls with 200 and the error envelope,
    /// instead of the status matching the failure.
    #[arg(long, env = "LEGACY_ERROR_STATUS", default_value = "false")]
    pub legacy_error_status: bool,

    /// Skip writing the sentinel document that forces index creation.
    #[arg(long, env = "SKIP_BOOTSTRAP", default_value = "false")]
    pub skip_bootstrap: bool,

    /// Service bindings document (JSON).
    #[arg(long, env = "VCAP_SERVICES", hide_env_values = true)]
    pub vcap_services: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            index: DEFAULT_INDEX.to_string(),
            request_timeout: 30,
            backend_timeout_ms: 10000,
            disable_certificate_validation: false,
            enable_cors: false,
            cors_origins: "*".to_string(),
            legacy_error_status: false,
            skip_bootstrap: false,
            vcap_services: None,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.backend_timeout_ms == 0 {
            errors.push("Backend timeout cannot be 0".to_string());
        }

        if self.request_timeout.saturating_mul(1000) <= self.backend_timeout_ms.saturating_mul(2) {
            errors.push(format!(
                "Request timeout ({}s) must exceed twice the backend timeout ({}ms)",
                self.request_timeout, self.backend_timeout_ms
            ));
        }

        if self.index.trim().is_empty() {
            errors.push("Index name cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            backend_timeout_ms: 1000,
            skip_bootstrap: true,
            ..Default::default()
        }
    }
}
