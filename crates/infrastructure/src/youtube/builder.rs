//! Builds [`YouTubeClient`]s from tokens.

use std::sync::Arc;

use reqwest::Url;
use tukija_application::ports::{Authorizer, ClientBuildError, ClientBuilder, TokenCache};
use tukija_domain::{AuthorizerConfig, OAuth2Token};

use super::client::YouTubeClient;
use crate::adapters::AuthenticatedClient;

/// Production API root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

const USER_AGENT: &str = concat!("Tukija/", env!("CARGO_PKG_VERSION"));

/// [`ClientBuilder`] producing YouTube Data API clients.
pub struct YouTubeClientBuilder {
    authorizer: Arc<dyn Authorizer>,
    cache: Option<Arc<dyn TokenCache>>,
    base_url: String,
}

impl YouTubeClientBuilder {
    /// Creates a builder that refreshes tokens through `authorizer`.
    #[must_use]
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            authorizer,
            cache: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Writes refreshed tokens back to `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Overrides the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn parse_base_url(&self) -> Result<Url, ClientBuildError> {
        // Url::join drops the last segment unless the base ends with a slash.
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| ClientBuildError::InvalidBaseUrl(format!("{raw}: {e}")))
    }
}

impl ClientBuilder for YouTubeClientBuilder {
    type Http = AuthenticatedClient;
    type Service = YouTubeClient;

    fn build_http_client(&self, token: OAuth2Token, config: AuthorizerConfig) -> Self::Http {
        let client = AuthenticatedClient::new(token, config, Arc::clone(&self.authorizer));
        match &self.cache {
            Some(cache) => client.with_cache(Arc::clone(cache)),
            None => client,
        }
    }

    fn build_api_client(&self, http: Self::Http) -> Result<Self::Service, ClientBuildError> {
        let base_url = self.parse_base_url()?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientBuildError::Connection(e.to_string()))?;

        Ok(YouTubeClient::new(client, http, base_url))
    }
}
