//! Unit tests for the feed module.
//!
//! Tests are organised by concept: geometry, filtering, domain parsing,
//! controller lifecycle, task posting, and the filesystem credential store.

mod geo_tests;
mod support;
