//! Connection settings and response classification shared by all backends.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::binding::SearchBinding;
use crate::error::{BackendError, BackendResult};

/// Authentication sent with every backend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendAuth {
    /// Basic username/password authentication, taken from the binding
    /// URI's user-info.
    Basic {
        /// The username for basic auth.
        username: String,
        /// The password for basic auth.
        password: String,
    },
}

/// Connection settings for a single search node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Node URL without user-info (e.g. `http://localhost:9200`).
    pub url: String,

    /// Optional authentication.
    #[serde(default)]
    pub auth: Option<BackendAuth>,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Whether to disable certificate validation (default: false).
    /// Only use for development/testing.
    #[serde(default)]
    pub disable_certificate_validation: bool,
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            auth: None,
            request_timeout_ms: default_request_timeout_ms(),
            disable_certificate_validation: false,
        }
    }
}

impl ConnectionConfig {
    /// Builds connection settings from a selected service binding.
    ///
    /// User-info embedded in the binding URI becomes basic authentication
    /// and is removed from the node URL.
    pub fn from_binding(binding: &SearchBinding) -> Self {
        let mut url = binding.uri.clone();

        let auth = if url.username().is_empty() {
            None
        } else {
            let username = decode_userinfo(url.username());
            let password = url.password().map(decode_userinfo).unwrap_or_default();
            Some(BackendAuth::Basic { username, password })
        };

        let _ = url.set_username("");
        let _ = url.set_password(None);

        Self {
            url: url.as_str().trim_end_matches('/').to_string(),
            auth,
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_request_timeout_ms(mut self, request_timeout_ms: u64) -> Self {
        self.request_timeout_ms = request_timeout_ms;
        self
    }

    /// Enables or disables certificate validation.
    pub fn with_certificate_validation(mut self, enabled: bool) -> Self {
        self.disable_certificate_validation = !enabled;
        self
    }
}

fn decode_userinfo(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// The document a call targets, used to classify 404/409 answers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentTarget<'a> {
    pub index: &'a str,
    pub id: &'a str,
}

/// Turns a raw backend answer into a typed result.
///
/// The body is parsed as JSON when possible and kept as a string otherwise.
pub(crate) fn classify_response(
    backend_name: &str,
    target: Option<DocumentTarget<'_>>,
    status: u16,
    body: String,
) -> BackendResult<Value> {
    let body = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };

    if (200..300).contains(&status) {
        return Ok(body);
    }

    if status >= 500 {
        warn!(backend = backend_name, status, body = %body, "Backend server error");
    }

    let err = match (status, target) {
        (404, Some(target)) => BackendError::NotFound {
            index: target.index.to_string(),
            id: target.id.to_string(),
            body,
        },
        (409, Some(target)) => BackendError::Conflict {
            index: target.index.to_string(),
            id: target.id.to_string(),
            body,
        },
        (400, _) => BackendError::Rejected {
            backend_name: backend_name.to_string(),
            status,
            body,
        },
        (401 | 403, _) => BackendError::Unauthorized {
            backend_name: backend_name.to_string(),
            status,
            body,
        },
        _ => BackendError::Status {
            backend_name: backend_name.to_string(),
            status,
            body,
        },
    };

    Err(err)
}
