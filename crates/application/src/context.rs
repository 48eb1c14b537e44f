//! Application context shared with UI handlers.
//!
//! The orchestration builds one of these and hands it to whatever needs the
//! authenticated client, instead of publishing the client through globals.

use crate::error::{ApplicationError, ApplicationResult};
use crate::use_cases::TokenOrigin;

/// Holds the authenticated API client, if authorization succeeded.
#[derive(Debug)]
pub struct AppContext<S> {
    service: Option<S>,
    origin: Option<TokenOrigin>,
}

impl<S> AppContext<S> {
    /// Creates a context with no authenticated client.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            service: None,
            origin: None,
        }
    }

    /// Creates a context around an authenticated client.
    #[must_use]
    pub const fn authenticated(service: S, origin: TokenOrigin) -> Self {
        Self {
            service: Some(service),
            origin: Some(origin),
        }
    }

    /// Returns the authenticated client.
    ///
    /// # Errors
    /// Returns `ApplicationError::Unauthenticated` when no client is set.
    pub fn service(&self) -> ApplicationResult<&S> {
        self.service.as_ref().ok_or(ApplicationError::Unauthenticated)
    }

    /// Returns true when a client is available.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.service.is_some()
    }

    /// Where the current token came from.
    #[must_use]
    pub const fn token_origin(&self) -> Option<TokenOrigin> {
        self.origin
    }

    /// Drops the authenticated client.
    pub fn clear(&mut self) {
        self.service = None;
        self.origin = None;
    }
}

impl<S> Default for AppContext<S> {
    fn default() -> Self {
        Self::unauthenticated()
    }
}
