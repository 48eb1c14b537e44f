//! Authenticate use case.
//!
//! Loads the client secret, reuses the cached token when there is one and
//! otherwise walks the user through the authorization-code flow, then builds
//! the API client.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use tukija_domain::{AuthError, AuthorizerConfig, DomainError, OAuth2Token};

use crate::auth::AuthorizationState;
use crate::cancellation::CancellationReceiver;
use crate::ports::{
    Authorizer, ClientBuildError, ClientBuilder, PromptError, SecretError, SecretLoader,
    TokenCache, TokenCacheError, UserPrompt,
};

/// Label shown when asking for the authorization code.
pub const CODE_PROMPT: &str = "Code";

/// Input for the authenticate use case.
#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    /// Path to the client secret document.
    pub secret_path: PathBuf,
    /// Scopes to request.
    pub scopes: Vec<String>,
}

/// Where the token used for the client came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrigin {
    /// Read from the token cache.
    Cache,
    /// Obtained through the authorization-code flow.
    Web,
}

/// Output of a successful authentication.
#[derive(Debug)]
pub struct AuthenticateOutput<S> {
    /// The authenticated API client.
    pub service: S,
    /// Where the token came from.
    pub origin: TokenOrigin,
    /// Path of the token cache file.
    pub cache_path: PathBuf,
}

/// Errors surfaced by the authenticate use case.
///
/// Cache read failures never appear here; they count as a cache miss.
#[derive(Debug, Error)]
pub enum AuthenticateError {
    /// The client secret could not be loaded.
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// The client secret does not describe a usable OAuth client.
    #[error("unable to parse client secret file to config: {0}")]
    Config(#[from] DomainError),

    /// The cache path could not be resolved.
    #[error("unable to get path to cached credential file: {0}")]
    CachePath(#[source] TokenCacheError),

    /// The authorization code could not be read.
    #[error("unable to read authorization code: {0}")]
    Prompt(#[from] PromptError),

    /// The code exchange failed.
    #[error("unable to retrieve token from web: {0}")]
    Authorization(#[from] AuthError),

    /// The new token could not be cached.
    #[error("unable to cache oauth token: {0}")]
    CacheStore(#[source] TokenCacheError),

    /// The API client could not be constructed.
    #[error("error creating YouTube client: {0}")]
    Connection(#[from] ClientBuildError),

    /// The flow was cancelled.
    #[error("authorization cancelled")]
    Cancelled,
}

/// Use case for obtaining an authenticated API client.
pub struct Authenticate<L, C: ?Sized, A: ?Sized, P, B> {
    secrets: L,
    cache: Arc<C>,
    authorizer: Arc<A>,
    prompt: P,
    builder: B,
    state: watch::Sender<AuthorizationState>,
}

impl<L, C, A, P, B> Authenticate<L, C, A, P, B>
where
    L: SecretLoader,
    C: TokenCache + ?Sized,
    A: Authorizer + ?Sized,
    P: UserPrompt,
    B: ClientBuilder,
{
    /// Creates a new `Authenticate` use case.
    pub fn new(secrets: L, cache: Arc<C>, authorizer: Arc<A>, prompt: P, builder: B) -> Self {
        let (state, _) = watch::channel(AuthorizationState::Idle);
        Self {
            secrets,
            cache,
            authorizer,
            prompt,
            builder,
            state,
        }
    }

    /// Subscribes to authorization state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthorizationState> {
        self.state.subscribe()
    }

    /// Returns the current authorization state.
    #[must_use]
    pub fn state(&self) -> AuthorizationState {
        self.state.borrow().clone()
    }

    /// Runs the whole flow.
    ///
    /// # Errors
    /// Returns `AuthenticateError` for every failure except cache reads,
    /// which fall back to the web flow.
    pub async fn execute(
        &self,
        input: &AuthenticateInput,
    ) -> Result<AuthenticateOutput<B::Service>, AuthenticateError> {
        self.set_state(AuthorizationState::Idle);

        let secret = self.secrets.load(&input.secret_path).await?;
        let config = AuthorizerConfig::from_secret(&secret, input.scopes.iter().cloned())?;

        let cache_path = self
            .cache
            .cache_path()
            .await
            .map_err(AuthenticateError::CachePath)?;

        let (token, origin) = match self.cached_token(&cache_path).await {
            Some(token) => (token, TokenOrigin::Cache),
            None => {
                let token = self.authorize_from_web(&config).await?;
                info!(path = %cache_path.display(), "Saving credential file");
                self.cache
                    .store(&cache_path, &token)
                    .await
                    .map_err(AuthenticateError::CacheStore)?;
                (token, TokenOrigin::Web)
            }
        };

        self.set_state(AuthorizationState::Authorized {
            access_token_preview: AuthorizationState::token_preview(&token.access_token),
        });

        let http = self.builder.build_http_client(token, config);
        let service = self.builder.build_api_client(http)?;

        Ok(AuthenticateOutput {
            service,
            origin,
            cache_path,
        })
    }

    /// Runs the flow until it finishes or `cancel` fires.
    ///
    /// # Errors
    /// Returns `AuthenticateError::Cancelled` if cancelled first, otherwise
    /// the same errors as [`Self::execute`].
    pub async fn execute_with_cancellation(
        &self,
        input: &AuthenticateInput,
        mut cancel: CancellationReceiver,
    ) -> Result<AuthenticateOutput<B::Service>, AuthenticateError> {
        tokio::select! {
            result = self.execute(input) => result,
            () = cancel.cancelled() => {
                self.set_state(AuthorizationState::Cancelled);
                Err(AuthenticateError::Cancelled)
            }
        }
    }

    /// Loads the cached token, treating every failure as a miss.
    async fn cached_token(&self, path: &Path) -> Option<OAuth2Token> {
        match self.cache.load(path).await {
            Ok(token) if token.is_usable() => {
                debug!(path = %path.display(), "Using cached token");
                Some(token)
            }
            Ok(_) => {
                warn!(path = %path.display(), "Cached token expired and cannot be refreshed");
                None
            }
            Err(TokenCacheError::NotFound(_)) => {
                debug!(path = %path.display(), "No cached token");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable token cache");
                None
            }
        }
    }

    async fn authorize_from_web(
        &self,
        config: &AuthorizerConfig,
    ) -> Result<OAuth2Token, AuthenticateError> {
        let auth_url = self.authorizer.authorization_url(config);
        if let Err(e) = self.prompt.display_authorization_url(&auth_url).await {
            self.set_state(AuthorizationState::Failed {
                error: e.to_string(),
            });
            return Err(e.into());
        }
        self.set_state(AuthorizationState::AwaitingCode { auth_url });

        let code = match self.prompt.request_line(CODE_PROMPT).await {
            Ok(code) => code,
            Err(e) => {
                self.set_state(AuthorizationState::Failed {
                    error: e.to_string(),
                });
                return Err(e.into());
            }
        };
        self.set_state(AuthorizationState::CodeReceived);

        match self.authorizer.exchange(config, &code).await {
            Ok(token) => Ok(token),
            Err(e) => {
                self.set_state(AuthorizationState::Failed {
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    fn set_state(&self, state: AuthorizationState) {
        self.state.send_replace(state);
    }
}
