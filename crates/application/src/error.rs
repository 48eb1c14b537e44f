//! Application error types

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The operation needs an authenticated API client and none is available.
    #[error("not authenticated; run the authorization flow first")]
    Unauthenticated,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
