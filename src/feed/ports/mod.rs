//! Port contracts for the task feed.
//!
//! Ports define infrastructure-agnostic interfaces used by feed services.

pub mod credentials;
pub mod location;
pub mod repository;

pub use credentials::{CredentialResult, CredentialStore, CredentialStoreError};
pub use location::{LocationError, LocationProvider, LocationResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
