//! Authorizer port
//!
//! The OAuth protocol itself lives behind this trait; the application layer
//! only sequences the calls.

use async_trait::async_trait;

use tukija_domain::{AuthError, AuthorizerConfig, OAuth2Token};

/// OAuth2 authorization-code client.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Builds the URL the user opens to grant access.
    ///
    /// Identical configs yield identical URLs. Offline access is always
    /// requested so the server issues a refresh token.
    fn authorization_url(&self, config: &AuthorizerConfig) -> String;

    /// Exchanges an authorization code for a token.
    ///
    /// # Errors
    /// Returns `AuthError` if the server rejects the code or the request fails.
    async fn exchange(
        &self,
        config: &AuthorizerConfig,
        code: &str,
    ) -> Result<OAuth2Token, AuthError>;

    /// Obtains a fresh access token using `token`'s refresh token.
    ///
    /// # Errors
    /// Returns `AuthError::TokenExpiredNoRefresh` if `token` has no refresh
    /// token, or `AuthError::RefreshFailed` if the server refuses.
    async fn refresh(
        &self,
        config: &AuthorizerConfig,
        token: &OAuth2Token,
    ) -> Result<OAuth2Token, AuthError>;
}
