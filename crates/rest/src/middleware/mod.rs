//! HTTP middleware for the Bonsai API.
//!
//! - [`timeout`] - Renders request timeouts as error envelopes

pub mod timeout;

pub use timeout::{TIMEOUT_STATUS, TimeoutSettings, timeout_envelope_middleware};
