//! In-memory credential store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::feed::{
    domain::BearerToken,
    ports::{CredentialResult, CredentialStore, CredentialStoreError},
};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    token: Arc<RwLock<Option<BearerToken>>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `token`.
    #[must_use]
    pub fn with_token(token: BearerToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Removes the stored token.
    ///
    /// # Errors
    ///
    /// Returns a storage error when lock acquisition fails.
    pub fn clear(&self) -> CredentialResult<()> {
        let mut token = self.token.write().map_err(|err| {
            CredentialStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        *token = None;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn read_token(&self) -> CredentialResult<Option<BearerToken>> {
        let token = self.token.read().map_err(|err| {
            CredentialStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(token.clone())
    }
}
