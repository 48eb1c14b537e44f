//! Client builder port

use tukija_domain::{AuthorizerConfig, OAuth2Token};

/// Errors that can occur while constructing API clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    /// The underlying HTTP client could not be created.
    #[error("unable to create HTTP client: {0}")]
    Connection(String),

    /// The API base URL is invalid.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Turns a token into a typed API client.
pub trait ClientBuilder: Send + Sync {
    /// HTTP client that injects the token into every request.
    type Http: Send;
    /// Typed API client.
    type Service: Send;

    /// Wraps `token` for per-request credential injection.
    ///
    /// Refreshing an expired token is delegated to the authorizer.
    fn build_http_client(&self, token: OAuth2Token, config: AuthorizerConfig) -> Self::Http;

    /// Constructs the API client on top of `http`.
    ///
    /// # Errors
    /// Returns `ClientBuildError` if the API client cannot be constructed.
    fn build_api_client(&self, http: Self::Http) -> Result<Self::Service, ClientBuildError>;
}
