//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while validating documents and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL for {field}: {message}")]
    InvalidUrl {
        /// Name of the offending field.
        field: &'static str,
        /// Parser message.
        message: String,
    },

    /// A required field is missing or empty.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The client-secret document carries no `installed` or `web` section.
    #[error("no credentials found in client secret document")]
    NoCredentials,

    /// No scope was requested.
    #[error("at least one scope is required")]
    NoScopes,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
