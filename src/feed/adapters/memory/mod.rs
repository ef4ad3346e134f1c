//! In-memory adapters for the feed ports.

mod credentials;
mod location;
mod repository;

pub use credentials::InMemoryCredentialStore;
pub use location::{FixedLocationProvider, ScriptedLocationProvider};
pub use repository::InMemoryTaskRepository;
