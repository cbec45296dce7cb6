//! Database connectors and utilities for the portal services.
//!
//! # Features
//!
//! - `mongo` (default) - MongoDB support
//! - `config` - load connection settings via `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongo;
//!
//! let client = mongo::connect("mongodb://localhost:27017").await?;
//! let db = client.database("portal");
//! ```

pub mod common;

#[cfg(feature = "mongo")]
pub mod mongo;

pub use common::{RetryConfig, retry, retry_with_backoff};
