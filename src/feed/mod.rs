//! Proximity-filtered task feed.
//!
//! Users see marketplace tasks near their current position, narrowed by a
//! title search and a category selection. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the pure feed filter in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
