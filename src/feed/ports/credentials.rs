//! Credential store port for the bearer token.

use crate::feed::domain::BearerToken;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialResult<T> = Result<T, CredentialStoreError>;

/// Read access to the stored bearer token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads the token stored under [`crate::feed::domain::AUTH_TOKEN_KEY`].
    ///
    /// Returns `Ok(None)` when no token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the backing store
    /// cannot be read.
    async fn read_token(&self) -> CredentialResult<Option<BearerToken>>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// Backing storage failure.
    #[error("credential storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
