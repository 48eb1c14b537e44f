//! Reads `client_secret.json` from disk.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;
use tukija_application::ports::{SecretError, SecretLoader};
use tukija_domain::{ClientSecret, ClientSecretFile};

use crate::serialization::from_json_bytes;

/// Loads the client secret document downloaded from the Google API console.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSecretLoader;

impl FileSecretLoader {
    /// Creates a new loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretLoader for FileSecretLoader {
    async fn load(&self, path: &Path) -> Result<ClientSecret, SecretError> {
        let content = tokio::fs::read(path).await.map_err(|source| SecretError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ClientSecretFile =
            from_json_bytes(&content).map_err(|e| SecretError::Parse(e.to_string()))?;
        let secret = file
            .into_secret()
            .map_err(|e| SecretError::Parse(e.to_string()))?;

        debug!(path = %path.display(), client_id = %secret.client_id, "Client secret loaded");
        Ok(secret)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const INSTALLED: &str = r#"{
        "installed": {
            "client_id": "123.apps.googleusercontent.com",
            "project_id": "tukija",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "client_secret": "s3cr3t",
            "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
        }
    }"#;

    #[tokio::test]
    async fn test_load_installed_secret() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("client_secret.json");
        tokio::fs::write(&path, INSTALLED).await.expect("write");

        let secret = FileSecretLoader::new().load(&path).await.expect("load");
        assert_eq!(secret.client_id, "123.apps.googleusercontent.com");
        assert_eq!(secret.redirect_uris[0], "urn:ietf:wg:oauth:2.0:oob");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = FileSecretLoader::new().load(&path).await.unwrap_err();
        match err {
            SecretError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("client_secret.json");
        tokio::fs::write(&path, "not json").await.expect("write");

        let err = FileSecretLoader::new().load(&path).await.unwrap_err();
        assert!(matches!(err, SecretError::Parse(_)));
    }

    #[tokio::test]
    async fn test_document_without_credentials_is_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("client_secret.json");
        tokio::fs::write(&path, "{}").await.expect("write");

        let err = FileSecretLoader::new().load(&path).await.unwrap_err();
        assert!(matches!(err, SecretError::Parse(m) if m.contains("no credentials")));
    }
}
