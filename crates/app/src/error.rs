//! Top-level error type

use tukija_application::ports::{PromptError, TokenCacheError};
use tukija_application::{ApplicationError, AuthenticateError};
use tukija_domain::AuthError;
use tukija_infrastructure::{ApiError, ExportError, SettingsError};

/// Anything that can end a Tukija run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The authorizer could not be set up.
    #[error("unable to set up authorization: {0}")]
    Authorizer(#[from] AuthError),

    /// Authorization failed.
    #[error(transparent)]
    Authenticate(#[from] AuthenticateError),

    /// A YouTube API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The command needs an authenticated client.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The cached token could not be removed.
    #[error("unable to sign out: {0}")]
    SignOut(#[from] TokenCacheError),

    /// The members export could not be saved.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Output could not be written.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The user interrupted the run.
    #[error("interrupted")]
    Interrupted,
}

impl AppError {
    /// Returns true if the run was stopped by the user.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::Interrupted | Self::Authenticate(AuthenticateError::Cancelled)
        )
    }
}
