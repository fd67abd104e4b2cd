//! HTTP request handlers.
//!
//! - [`health`] - Root greeting, cluster info and cluster health
//! - [`read`] - Read a document by id
//! - [`create`] - Create the placeholder document at an id
//! - [`delete`] - Delete a document by id

pub mod create;
pub mod delete;
pub mod health;
pub mod read;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, info_handler, root_handler};
pub use read::read_handler;
