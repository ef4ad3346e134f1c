//! Filesystem adapters using capability-scoped directory handles.

mod credentials;

pub use credentials::DirCredentialStore;
