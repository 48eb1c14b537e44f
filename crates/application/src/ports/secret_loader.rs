//! Client secret loader port

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use tukija_domain::ClientSecret;

/// Errors that can occur while reading the client secret.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// The file could not be read.
    #[error("unable to read client secret file {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document is malformed.
    #[error("unable to parse client secret file: {0}")]
    Parse(String),
}

/// Reads the application's OAuth client secret.
#[async_trait]
pub trait SecretLoader: Send + Sync {
    /// Loads the client secret document at `path`.
    ///
    /// # Errors
    /// Returns `SecretError::Io` if the file is unreadable and
    /// `SecretError::Parse` if it is malformed.
    async fn load(&self, path: &Path) -> Result<ClientSecret, SecretError>;
}
