//! # bonsai-search
//!
//! Search backend layer for the Bonsai API.
//!
//! The crate provides:
//!
//! - [`SearchBackend`] - one trait for the handful of calls the API makes
//!   (`info`, `health`, `get`, `create`, `delete`, `refresh`)
//! - [`backends`] - Elasticsearch and OpenSearch implementations, each behind
//!   a feature flag of the same name
//! - [`binding`] - discovery of the search service binding from `VCAP_SERVICES`
//! - [`document`] - the tweet document model and the placeholder create
//! - [`error`] - typed backend and binding errors
//!
//! # Quick Start
//!
//! ```no_run
//! use bonsai_search::binding::ServiceBindings;
//! use bonsai_search::backends::ConnectionConfig;
//!
//! # fn example(raw: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let binding = ServiceBindings::from_json(raw)?.select()?;
//! let config = ConnectionConfig::from_binding(&binding);
//! println!("{} at {}", binding.kind, config.url);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod binding;
pub mod core;
pub mod document;
pub mod error;

pub use crate::core::{BackendKind, SearchBackend};
pub use document::{DEFAULT_INDEX, SENTINEL_ID, Tweet, create_placeholder};
pub use error::{BackendError, BackendResult, BindingError};
