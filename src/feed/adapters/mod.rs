//! Adapter implementations of the feed ports.
//!
//! - [`memory`]: deterministic in-memory adapters for tests and local runs
//! - [`http`]: the remote task service over HTTP
//! - [`filesystem`]: token storage in a scoped directory

pub mod filesystem;
pub mod http;
pub mod memory;
