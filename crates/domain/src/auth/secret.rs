//! Client-secret document issued by the Google API console

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Application-level OAuth credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSecret {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Authorization endpoint.
    pub auth_uri: String,
    /// Token endpoint.
    pub token_uri: String,
    /// Registered redirect URIs.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    /// Console project the client belongs to.
    #[serde(default)]
    pub project_id: Option<String>,
}

/// On-disk shape of `client_secret.json`.
///
/// The console wraps the credentials in either an `installed` (desktop) or a
/// `web` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientSecretFile {
    /// Desktop application credentials.
    #[serde(default)]
    pub installed: Option<ClientSecret>,
    /// Web application credentials.
    #[serde(default)]
    pub web: Option<ClientSecret>,
}

impl ClientSecretFile {
    /// Returns the credentials, preferring `web` over `installed`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoCredentials`] if neither section is present.
    pub fn into_secret(self) -> DomainResult<ClientSecret> {
        self.web.or(self.installed).ok_or(DomainError::NoCredentials)
    }
}
