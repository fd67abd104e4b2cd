//! Backend definition shared by the client-library backends.
//!
//! The `opensearch` crate is a fork of the `elasticsearch` crate and keeps
//! its builder API (`GetParts`, `TransportBuilder`, `Credentials`, ...), so
//! a single definition is instantiated once per client crate.

/// Defines a [`SearchBackend`](crate::core::SearchBackend) over a client
/// crate with the `elasticsearch`-style API.
macro_rules! client_backend {
    (
        $(#[$meta:meta])*
        $backend:ident {
            client: $krate:ident :: $client:ident,
            kind: $kind:ident,
            name: $name:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $backend {
            client: $krate::$client,
            config: $crate::backends::ConnectionConfig,
        }

        impl ::std::fmt::Debug for $backend {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($backend))
                    .field("url", &self.config.url)
                    .field("request_timeout_ms", &self.config.request_timeout_ms)
                    .finish_non_exhaustive()
            }
        }

        impl $backend {
            const BACKEND_NAME: &'static str = $name;

            /// Creates the backend. No connection is made yet.
            pub fn new(
                config: $crate::backends::ConnectionConfig,
            ) -> $crate::error::BackendResult<Self> {
                let client = Self::build_client(&config)?;
                Ok(Self { client, config })
            }

            fn build_client(
                config: &$crate::backends::ConnectionConfig,
            ) -> $crate::error::BackendResult<$krate::$client> {
                use $crate::backends::BackendAuth;
                use $crate::error::BackendError;
                use $krate::auth::Credentials;
                use $krate::cert::CertificateValidation;
                use $krate::http::transport::{SingleNodeConnectionPool, TransportBuilder};

                let parsed_url: $krate::http::Url = config.url.parse().map_err(|e| {
                    BackendError::configuration(Self::BACKEND_NAME, format!("Invalid URL: {}", e))
                })?;

                let conn_pool = SingleNodeConnectionPool::new(parsed_url);

                let mut builder = TransportBuilder::new(conn_pool)
                    .timeout(::std::time::Duration::from_millis(config.request_timeout_ms));

                if config.disable_certificate_validation {
                    builder = builder.cert_validation(CertificateValidation::None);
                }

                if let Some(BackendAuth::Basic { username, password }) = &config.auth {
                    builder = builder.auth(Credentials::Basic(username.clone(), password.clone()));
                }

                let transport = builder.build().map_err(|e| {
                    BackendError::configuration(
                        Self::BACKEND_NAME,
                        format!("Failed to build transport: {}", e),
                    )
                })?;

                Ok($krate::$client::new(transport))
            }

            /// Returns the backend configuration.
            pub fn config(&self) -> &$crate::backends::ConnectionConfig {
                &self.config
            }

            async fn read(
                sent: Result<$krate::http::response::Response, $krate::Error>,
                target: Option<$crate::backends::connection::DocumentTarget<'_>>,
            ) -> $crate::error::BackendResult<::serde_json::Value> {
                use $crate::error::BackendError;

                let response = sent
                    .map_err(|e| BackendError::transport(Self::BACKEND_NAME, e.to_string()))?;
                let status = response.status_code().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|e| BackendError::transport(Self::BACKEND_NAME, e.to_string()))?;
                $crate::backends::connection::classify_response(
                    Self::BACKEND_NAME,
                    target,
                    status,
                    body,
                )
            }
        }

        #[::async_trait::async_trait]
        impl $crate::core::SearchBackend for $backend {
            fn kind(&self) -> $crate::core::BackendKind {
                $crate::core::BackendKind::$kind
            }

            fn backend_name(&self) -> &'static str {
                Self::BACKEND_NAME
            }

            async fn info(&self) -> $crate::error::BackendResult<::serde_json::Value> {
                Self::read(self.client.info().send().await, None).await
            }

            async fn health(&self) -> $crate::error::BackendResult<::serde_json::Value> {
                let sent = self
                    .client
                    .cluster()
                    .health($krate::cluster::ClusterHealthParts::None)
                    .send()
                    .await;
                Self::read(sent, None).await
            }

            async fn get(
                &self,
                index: &str,
                id: &str,
            ) -> $crate::error::BackendResult<::serde_json::Value> {
                ::tracing::debug!(index = %index, id = %id, "Fetching document");
                let sent = self
                    .client
                    .get($krate::GetParts::IndexId(index, id))
                    .send()
                    .await;
                let target = $crate::backends::connection::DocumentTarget { index, id };
                Self::read(sent, Some(target)).await
            }

            async fn create(
                &self,
                index: &str,
                id: &str,
                document: ::serde_json::Value,
            ) -> $crate::error::BackendResult<::serde_json::Value> {
                ::tracing::debug!(index = %index, id = %id, "Creating document");
                let sent = self
                    .client
                    .create($krate::CreateParts::IndexId(index, id))
                    .body(document)
                    .send()
                    .await;
                let target = $crate::backends::connection::DocumentTarget { index, id };
                Self::read(sent, Some(target)).await
            }

            async fn delete(
                &self,
                index: &str,
                id: &str,
            ) -> $crate::error::BackendResult<::serde_json::Value> {
                ::tracing::debug!(index = %index, id = %id, "Deleting document");
                let sent = self
                    .client
                    .delete($krate::DeleteParts::IndexId(index, id))
                    .send()
                    .await;
                let target = $crate::backends::connection::DocumentTarget { index, id };
                Self::read(sent, Some(target)).await
            }

            async fn refresh(&self, index: &str) -> $crate::error::BackendResult<::serde_json::Value> {
                let sent = self
                    .client
                    .indices()
                    .refresh($krate::indices::IndicesRefreshParts::Index(&[index]))
                    .send()
                    .await;
                Self::read(sent, None).await
            }
        }
    };
}

pub(crate) use client_backend;
