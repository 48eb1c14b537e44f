//! File-based token cache.
//!
//! The token lives in `<home>/.credentials/<file name>`. The directory is
//! created owner-only (`0700`) and the token file is created `0600` on unix.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use tukija_application::ports::{TokenCache, TokenCacheError};
use tukija_domain::OAuth2Token;
use url::form_urlencoded;

use crate::serialization::{from_json_bytes, to_json_pretty_bytes};

/// Directory under the home directory that holds cached credentials.
pub const DEFAULT_CREDENTIALS_DIR: &str = ".credentials";

/// Default token file name.
pub const DEFAULT_TOKEN_FILE_NAME: &str = "tukija.json";

/// File-based token cache.
///
/// Stores the token as a JSON document:
/// ```json
/// {
///   "access_token": "ya29.a0Af...",
///   "token_type": "Bearer",
///   "expires_at": "2024-05-01T12:00:00Z",
///   "refresh_token": "1//0g...",
///   "scopes": ["https://www.googleapis.com/auth/youtube.readonly"],
///   "obtained_at": "2024-05-01T11:00:00Z"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenCache {
    home: Option<PathBuf>,
    credentials_dir: String,
    file_name: String,
}

impl FileTokenCache {
    /// Creates a cache in the current user's home directory.
    #[must_use]
    pub fn new(credentials_dir: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::with_home(dirs::home_dir(), credentials_dir, file_name)
    }

    /// Creates a cache rooted at an explicit home directory.
    ///
    /// `None` behaves like a user without a home directory.
    #[must_use]
    pub fn with_home(
        home: Option<PathBuf>,
        credentials_dir: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            home,
            credentials_dir: credentials_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// The token file name, escaped for use as a single path component.
    #[must_use]
    pub fn escaped_file_name(&self) -> String {
        form_urlencoded::byte_serialize(self.file_name.as_bytes()).collect()
    }

    /// Returns the cache directory and file paths without touching the disk.
    fn paths(&self) -> Result<(PathBuf, PathBuf), TokenCacheError> {
        let home = self.home.as_ref().ok_or(TokenCacheError::NoHomeDirectory)?;
        let dir = home.join(&self.credentials_dir);
        let file = dir.join(self.escaped_file_name());
        Ok((dir, file))
    }
}

impl Default for FileTokenCache {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIALS_DIR, DEFAULT_TOKEN_FILE_NAME)
    }
}

async fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o700);
    builder.create(dir).await
}

#[async_trait]
impl TokenCache for FileTokenCache {
    async fn cache_path(&self) -> Result<PathBuf, TokenCacheError> {
        let (dir, file) = self.paths()?;
        create_private_dir(&dir).await?;
        Ok(file)
    }

    async fn load(&self, path: &Path) -> Result<OAuth2Token, TokenCacheError> {
        let content = fs::read(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                TokenCacheError::NotFound(path.to_path_buf())
            } else {
                TokenCacheError::Io(e)
            }
        })?;

        from_json_bytes(&content).map_err(|e| TokenCacheError::Decode(e.to_string()))
    }

    async fn store(&self, path: &Path, token: &OAuth2Token) -> Result<(), TokenCacheError> {
        if let Some(parent) = path.parent() {
            create_private_dir(parent).await?;
        }

        let content = to_json_pretty_bytes(token).map_err(io::Error::other)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(path).await?;
        file.write_all(&content).await?;
        file.flush().await?;

        debug!(path = %path.display(), "Token cache written");
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<(), TokenCacheError> {
        match fs::remove_file(path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(TokenCacheError::Io(e)),
            _ => Ok(()),
        }
    }
}
