//! YouTube API errors

use tukija_domain::AuthError;

/// Errors returned by [`super::YouTubeClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The token could not be refreshed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("YouTube API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response body did not match the expected resource.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The authenticated account owns no channel.
    #[error("the authenticated account has no YouTube channel")]
    NoChannel,
}
