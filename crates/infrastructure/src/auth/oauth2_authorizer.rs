//! `OAuth2` authorization-code flow backed by the `oauth2` crate.

use async_trait::async_trait;
use oauth2::basic::{BasicClient, BasicErrorResponse, BasicTokenResponse, BasicTokenType};
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, HttpClientError, RedirectUrl, RefreshToken, RequestTokenError, Scope,
    TokenResponse, TokenUrl, reqwest,
};
use tracing::{debug, warn};
use tukija_application::ports::Authorizer;
use tukija_domain::{AuthError, AuthorizerConfig, OAuth2Token};

/// `state` value sent with the authorization URL.
///
/// The code is pasted back by hand, so there is no redirect to verify it on.
pub const STATE_TOKEN: &str = "state-token";

type ConfiguredClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

type TokenRequestError = RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>;

/// Authorizer speaking to the provider's authorization and token endpoints.
pub struct OAuth2Authorizer {
    http_client: reqwest::Client,
}

impl OAuth2Authorizer {
    /// Creates an authorizer with its own HTTP client.
    ///
    /// Redirects are disabled on token requests.
    ///
    /// # Errors
    /// Returns `AuthError::NetworkError` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::NetworkError {
                message: format!("unable to create HTTP client: {e}"),
            })?;
        Ok(Self::with_client(http_client))
    }

    /// Creates an authorizer using the given HTTP client.
    #[must_use]
    pub const fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn client(config: &AuthorizerConfig) -> ConfiguredClient {
        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_auth_uri(AuthUrl::from_url(config.auth_url.clone()))
            .set_token_uri(TokenUrl::from_url(config.token_url.clone()))
            .set_redirect_uri(RedirectUrl::from_url(config.redirect_url.clone()))
            .set_auth_type(AuthType::RequestBody);

        if config.client_secret.is_empty() {
            client
        } else {
            client.set_client_secret(ClientSecret::new(config.client_secret.clone()))
        }
    }

    fn to_token(response: &BasicTokenResponse, config: &AuthorizerConfig) -> OAuth2Token {
        let token_type = match response.token_type() {
            BasicTokenType::Bearer => "Bearer".to_string(),
            other => other.as_ref().to_string(),
        };

        // Servers may omit the scope field when the grant matches the request.
        let scopes = response.scopes().map_or_else(
            || config.scopes.clone(),
            |granted| granted.iter().map(|s| s.as_str().to_owned()).collect(),
        );

        OAuth2Token::new(
            response.access_token().secret().clone(),
            token_type,
            response.expires_in().map(|d| d.as_secs()),
            response.refresh_token().map(|r| r.secret().clone()),
            scopes,
        )
    }
}

fn describe(error: &TokenRequestError) -> String {
    match error {
        RequestTokenError::ServerResponse(response) => response.to_string(),
        RequestTokenError::Parse(e, _) => format!("unexpected token response: {e}"),
        RequestTokenError::Other(message) => message.clone(),
        RequestTokenError::Request(e) => e.to_string(),
    }
}

fn exchange_error(error: &TokenRequestError) -> AuthError {
    let message = describe(error);
    match error {
        RequestTokenError::Request(_) => AuthError::NetworkError { message },
        _ => AuthError::OAuth2AuthorizationFailed { message },
    }
}

fn refresh_error(error: &TokenRequestError) -> AuthError {
    let message = describe(error);
    match error {
        RequestTokenError::Request(_) => AuthError::NetworkError { message },
        _ => AuthError::RefreshFailed { message },
    }
}

#[async_trait]
impl Authorizer for OAuth2Authorizer {
    fn authorization_url(&self, config: &AuthorizerConfig) -> String {
        let (url, _state) = Self::client(config)
            .authorize_url(|| CsrfToken::new(STATE_TOKEN.to_string()))
            .add_scopes(config.scopes.iter().cloned().map(Scope::new))
            .add_extra_param("access_type", "offline")
            .url();
        url.to_string()
    }

    async fn exchange(
        &self,
        config: &AuthorizerConfig,
        code: &str,
    ) -> Result<OAuth2Token, AuthError> {
        debug!(token_url = %config.token_url, "Exchanging authorization code");

        let response = Self::client(config)
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| {
                warn!(error = %describe(&e), "Authorization code exchange failed");
                exchange_error(&e)
            })?;

        Ok(Self::to_token(&response, config))
    }

    async fn refresh(
        &self,
        config: &AuthorizerConfig,
        token: &OAuth2Token,
    ) -> Result<OAuth2Token, AuthError> {
        let refresh_token = token
            .refresh_token
            .as_ref()
            .ok_or(AuthError::TokenExpiredNoRefresh)?;

        debug!(token_url = %config.token_url, "Refreshing access token");

        let response = Self::client(config)
            .exchange_refresh_token(&RefreshToken::new(refresh_token.clone()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| refresh_error(&e))?;

        Ok(Self::to_token(&response, config).inherit_refresh_token(token))
    }
}
