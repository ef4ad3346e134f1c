//! Taskfeed: nearby-task feed for a task marketplace client.
//!
//! This crate loads task records from a remote task service, keeps those
//! within a fixed radius of the user, and narrows them by search text and
//! category. It also posts new tasks with a stored bearer credential.
//!
//! # Architecture
//!
//! Taskfeed follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, filesystem,
//!   in-memory)
//!
//! # Modules
//!
//! - [`feed`]: Task records, filtering, and the feed controller
//! - [`config`]: Settings loaded from the environment
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod feed;
pub mod telemetry;
