//! Per-request credential injection.
//!
//! Holds the current token and attaches it to outgoing requests. A token that
//! is about to expire is refreshed through the authorizer first, and the new
//! token is written back to the cache when one is configured.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use tukija_application::ports::{Authorizer, TokenCache};
use tukija_domain::{AuthError, AuthorizerConfig, OAuth2Token};

/// Refresh tokens this many seconds before they expire.
pub const REFRESH_BUFFER_SECONDS: i64 = 60;

/// Authorizes outgoing requests with an `OAuth2` token.
pub struct AuthenticatedClient {
    token: Mutex<OAuth2Token>,
    config: AuthorizerConfig,
    authorizer: Arc<dyn Authorizer>,
    cache: Option<Arc<dyn TokenCache>>,
}

impl AuthenticatedClient {
    /// Wraps `token`; refreshes go through `authorizer`.
    #[must_use]
    pub fn new(token: OAuth2Token, config: AuthorizerConfig, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            token: Mutex::new(token),
            config,
            authorizer,
            cache: None,
        }
    }

    /// Writes refreshed tokens back to `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Snapshot of the current token.
    pub async fn token(&self) -> OAuth2Token {
        self.token.lock().await.clone()
    }

    /// Adds the `Authorization` header to `request`, refreshing the token
    /// first if it expires within [`REFRESH_BUFFER_SECONDS`].
    ///
    /// # Errors
    /// Returns `AuthError` if a needed refresh is impossible or refused.
    pub async fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let mut token = self.token.lock().await;

        if token.is_expired_or_expiring(REFRESH_BUFFER_SECONDS) {
            debug!(
                seconds_left = token.seconds_until_expiry(),
                "Access token expiring, refreshing"
            );
            let refreshed = self.authorizer.refresh(&self.config, &token).await?;
            info!("Access token refreshed");
            self.write_back(&refreshed).await;
            *token = refreshed;
        }

        Ok(request.header(reqwest::header::AUTHORIZATION, token.authorization_header()))
    }

    async fn write_back(&self, token: &OAuth2Token) {
        let Some(cache) = &self.cache else {
            return;
        };

        let result = match cache.cache_path().await {
            Ok(path) => cache.store(&path, token).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(error = %e, "Unable to cache refreshed token");
        }
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("client_id", &self.config.client_id)
            .field("caches_refreshes", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}
