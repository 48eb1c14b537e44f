//! Authorization configuration and token types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::secret::ClientSecret;
use crate::error::{DomainError, DomainResult};

/// Scope for read-only access to the authenticated user's YouTube account.
pub const YOUTUBE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/youtube.readonly";

/// Scope for listing channel members and membership levels.
pub const YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE: &str =
    "https://www.googleapis.com/auth/youtube.channel-memberships.creator";

/// Everything the authorizer needs for one authorization attempt.
///
/// Built from a [`ClientSecret`] plus the requested scopes. All endpoint URLs
/// are parsed up front so later steps cannot fail on malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerConfig {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Authorization endpoint.
    pub auth_url: Url,
    /// Token endpoint.
    pub token_url: Url,
    /// Redirect URI registered for this client.
    pub redirect_url: Url,
    /// Requested scopes, in request order.
    pub scopes: Vec<String>,
}

impl AuthorizerConfig {
    /// Derives a config from a client secret and the scopes to request.
    ///
    /// The first registered redirect URI is used.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not a valid URL, if the secret
    /// registers no redirect URI, or if `scopes` is empty.
    pub fn from_secret<I, S>(secret: &ClientSecret, scopes: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if secret.client_id.trim().is_empty() {
            return Err(DomainError::MissingField("client_id"));
        }

        let redirect = secret
            .redirect_uris
            .first()
            .ok_or(DomainError::MissingField("redirect_uris"))?;

        let scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
        if scopes.is_empty() {
            return Err(DomainError::NoScopes);
        }

        Ok(Self {
            client_id: secret.client_id.clone(),
            client_secret: secret.client_secret.clone(),
            auth_url: parse_url("auth_uri", &secret.auth_uri)?,
            token_url: parse_url("token_uri", &secret.token_uri)?,
            redirect_url: parse_url("redirect_uris", redirect)?,
            scopes,
        })
    }
}

fn parse_url(field: &'static str, raw: &str) -> DomainResult<Url> {
    Url::parse(raw).map_err(|e| DomainError::InvalidUrl {
        field,
        message: e.to_string(),
    })
}

/// `OAuth2` token with metadata for expiry tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Token {
    /// The access token string
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// When the token expires (if known)
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token for obtaining new access tokens
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Scopes granted by this token
    #[serde(default)]
    pub scopes: Vec<String>,
    /// When this token was obtained
    pub obtained_at: DateTime<Utc>,
}

impl OAuth2Token {
    /// Create a new token with current timestamp.
    #[must_use]
    pub fn new(
        access_token: String,
        token_type: String,
        expires_in_secs: Option<u64>,
        refresh_token: Option<String>,
        scopes: Vec<String>,
    ) -> Self {
        Self::obtained_at(
            Utc::now(),
            access_token,
            token_type,
            expires_in_secs,
            refresh_token,
            scopes,
        )
    }

    /// Create a token as if it had been obtained at `now`.
    #[must_use]
    pub fn obtained_at(
        now: DateTime<Utc>,
        access_token: String,
        token_type: String,
        expires_in_secs: Option<u64>,
        refresh_token: Option<String>,
        scopes: Vec<String>,
    ) -> Self {
        let expires_at = expires_in_secs
            .and_then(|secs| chrono::Duration::try_seconds(secs.cast_signed()))
            .and_then(|lifetime| now.checked_add_signed(lifetime));

        Self {
            access_token,
            token_type,
            expires_at,
            refresh_token,
            scopes,
            obtained_at: now,
        }
    }

    /// Check if the token is expired or will expire within the given buffer.
    #[must_use]
    pub fn is_expired_or_expiring(&self, buffer_seconds: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            let buffer = chrono::Duration::seconds(buffer_seconds);
            Utc::now() + buffer >= expires_at
        })
    }

    /// Check if the token can be refreshed.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// A token is usable if it is still valid or can be refreshed.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.is_expired_or_expiring(0) || self.can_refresh()
    }

    /// Time until expiry in seconds, or None if no expiry.
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at.map(|exp| (exp - Utc::now()).num_seconds())
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Keeps `previous`'s refresh token when this token came without one.
    ///
    /// Google omits the refresh token from refresh responses.
    #[must_use]
    pub fn inherit_refresh_token(mut self, previous: &Self) -> Self {
        if self.refresh_token.is_none() {
            self.refresh_token.clone_from(&previous.refresh_token);
        }
        self
    }
}

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Token expired and no refresh token available.
    TokenExpiredNoRefresh,
    /// Failed to refresh token.
    RefreshFailed {
        /// Error description.
        message: String,
    },
    /// The authorization server rejected the code.
    OAuth2AuthorizationFailed {
        /// Error description.
        message: String,
    },
    /// Invalid `OAuth2` configuration.
    InvalidConfiguration {
        /// Error description.
        message: String,
    },
    /// Network error.
    NetworkError {
        /// Error description.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpiredNoRefresh => {
                write!(f, "Token expired and no refresh token available")
            }
            Self::RefreshFailed { message } => write!(f, "Failed to refresh token: {message}"),
            Self::OAuth2AuthorizationFailed { message } => {
                write!(f, "OAuth2 authorization failed: {message}")
            }
            Self::InvalidConfiguration { message } => {
                write!(f, "Invalid OAuth2 configuration: {message}")
            }
            Self::NetworkError { message } => write!(f, "Network error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn secret() -> ClientSecret {
        ClientSecret {
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "shh".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            redirect_uris: vec![
                "urn:ietf:wg:oauth:2.0:oob".to_string(),
                "http://localhost".to_string(),
            ],
            project_id: Some("tukija".to_string()),
        }
    }

    #[test]
    fn test_config_uses_first_redirect_uri() {
        let config =
            AuthorizerConfig::from_secret(&secret(), [YOUTUBE_READONLY_SCOPE]).expect("config");
        assert_eq!(config.redirect_url.as_str(), "urn:ietf:wg:oauth:2.0:oob");
        assert_eq!(config.client_id, "client-123.apps.googleusercontent.com");
        assert_eq!(config.scopes, vec![YOUTUBE_READONLY_SCOPE.to_string()]);
    }

    #[test]
    fn test_config_requires_redirect_uri() {
        let mut secret = secret();
        secret.redirect_uris.clear();
        let err = AuthorizerConfig::from_secret(&secret, ["s"]).unwrap_err();
        assert_eq!(err, DomainError::MissingField("redirect_uris"));
    }

    #[test]
    fn test_config_requires_scopes() {
        let err = AuthorizerConfig::from_secret(&secret(), Vec::<String>::new()).unwrap_err();
        assert_eq!(err, DomainError::NoScopes);
    }

    #[test]
    fn test_config_rejects_bad_token_uri() {
        let mut secret = secret();
        secret.token_uri = "not a url".to_string();
        let err = AuthorizerConfig::from_secret(&secret, ["s"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl { field: "token_uri", .. }));
    }

    #[test]
    fn test_oauth2_token_expiry() {
        let token = OAuth2Token::new(
            "access123".to_string(),
            "Bearer".to_string(),
            Some(3600),
            Some("refresh456".to_string()),
            vec!["read".to_string()],
        );

        assert!(!token.is_expired_or_expiring(0));
        assert!(token.can_refresh());
        assert!(token.is_usable());
        assert!(token.seconds_until_expiry().is_some());
        assert_eq!(token.authorization_header(), "Bearer access123");
    }

    #[test]
    fn test_expired_token_without_refresh_is_unusable() {
        let token = OAuth2Token::obtained_at(
            Utc::now() - chrono::Duration::hours(2),
            "stale".to_string(),
            "Bearer".to_string(),
            Some(3600),
            None,
            vec![],
        );

        assert!(token.is_expired_or_expiring(0));
        assert!(!token.is_usable());
    }

    #[test]
    fn test_oauth2_token_no_expiry() {
        let token = OAuth2Token::new(
            "access123".to_string(),
            "Bearer".to_string(),
            None,
            None,
            vec![],
        );

        assert!(!token.is_expired_or_expiring(0));
        assert!(!token.can_refresh());
        assert!(token.seconds_until_expiry().is_none());
    }

    #[test]
    fn test_inherit_refresh_token() {
        let old = OAuth2Token::new(
            "old".to_string(),
            "Bearer".to_string(),
            Some(10),
            Some("keep-me".to_string()),
            vec![],
        );
        let fresh = OAuth2Token::new("new".to_string(), "Bearer".to_string(), Some(3600), None, vec![])
            .inherit_refresh_token(&old);

        assert_eq!(fresh.access_token, "new");
        assert_eq!(fresh.refresh_token.as_deref(), Some("keep-me"));
    }

    #[test]
    fn test_token_json_round_trip() {
        let token = OAuth2Token::new(
            "access".to_string(),
            "Bearer".to_string(),
            Some(3599),
            Some("refresh".to_string()),
            vec![YOUTUBE_READONLY_SCOPE.to_string()],
        );
        let json = serde_json::to_string(&token).expect("serialize");
        let restored: OAuth2Token = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, token);
    }

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::OAuth2AuthorizationFailed {
            message: "invalid_grant".to_string(),
        };
        assert_eq!(err.to_string(), "OAuth2 authorization failed: invalid_grant");
    }
}
