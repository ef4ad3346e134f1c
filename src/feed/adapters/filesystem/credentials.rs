//! Credential store reading the bearer token from a capability-scoped
//! directory.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io::ErrorKind;
use tracing::debug;

use crate::feed::{
    domain::{AUTH_TOKEN_KEY, BearerToken},
    ports::{CredentialResult, CredentialStore, CredentialStoreError},
};

/// Credential store holding the token in a file named
/// [`AUTH_TOKEN_KEY`] inside one directory.
///
/// A missing or blank file means no token is stored.
#[derive(Debug)]
pub struct DirCredentialStore {
    dir: Dir,
}

impl DirCredentialStore {
    /// Opens the store rooted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the directory cannot
    /// be opened.
    pub fn open(path: &Utf8Path) -> CredentialResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(CredentialStoreError::storage)?;
        Ok(Self { dir })
    }

    /// Creates a store over an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    /// Persists `token`, replacing any stored value.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the file cannot be
    /// written.
    pub fn write_token(&self, token: &BearerToken) -> CredentialResult<()> {
        self.dir
            .write(AUTH_TOKEN_KEY, token.expose())
            .map_err(CredentialStoreError::storage)
    }

    /// Removes the stored token; a missing token is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the file exists but
    /// cannot be removed.
    pub fn clear(&self) -> CredentialResult<()> {
        match self.dir.remove_file(AUTH_TOKEN_KEY) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CredentialStoreError::storage(err)),
        }
    }
}

#[async_trait]
impl CredentialStore for DirCredentialStore {
    async fn read_token(&self) -> CredentialResult<Option<BearerToken>> {
        match self.dir.read_to_string(AUTH_TOKEN_KEY) {
            Ok(contents) => Ok(BearerToken::new(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no stored credential");
                Ok(None)
            }
            Err(err) => Err(CredentialStoreError::storage(err)),
        }
    }
}
