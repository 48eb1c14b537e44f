//! Token cache port
//!
//! Defines the interface for persisting the user's OAuth token between runs.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use tukija_domain::OAuth2Token;

/// Errors that can occur during token cache operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenCacheError {
    /// The current user's home directory could not be determined.
    #[error("could not determine the home directory of the current user")]
    NoHomeDirectory,

    /// No token document exists at the path.
    #[error("no cached token at {0}")]
    NotFound(PathBuf),

    /// The token document is malformed.
    #[error("invalid token document: {0}")]
    Decode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenCacheError {
    /// Returns true for failures of the file system or path resolution.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::NoHomeDirectory | Self::Io(_))
    }
}

/// Per-user token storage.
///
/// The cache is advisory: callers treat any `load` failure as "no token".
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Resolves the cache file path for the current user.
    ///
    /// Creates the containing directory if it does not exist yet.
    ///
    /// # Errors
    /// Returns `TokenCacheError::NoHomeDirectory` if the home directory is
    /// unknown, or `TokenCacheError::Io` if the directory cannot be created.
    async fn cache_path(&self) -> Result<PathBuf, TokenCacheError>;

    /// Loads the token stored at `path`.
    ///
    /// # Errors
    /// Returns `TokenCacheError::NotFound` if the file does not exist and
    /// `TokenCacheError::Decode` if it is not a token document.
    async fn load(&self, path: &Path) -> Result<OAuth2Token, TokenCacheError>;

    /// Replaces the token stored at `path`.
    ///
    /// # Errors
    /// Returns `TokenCacheError::Io` if the file cannot be written.
    async fn store(&self, path: &Path, token: &OAuth2Token) -> Result<(), TokenCacheError>;

    /// Deletes the token stored at `path`. Deleting a missing token succeeds.
    ///
    /// # Errors
    /// Returns `TokenCacheError::Io` if the file exists but cannot be removed.
    async fn remove(&self, path: &Path) -> Result<(), TokenCacheError>;
}
