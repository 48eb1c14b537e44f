//! Authorization flow state.

/// Where the orchestration currently is in the authorization-code flow.
///
/// ```text
/// Idle --url shown--> AwaitingCode --code read--> CodeReceived
///      --exchange ok--> Authorized
///      --exchange err--> Failed
/// ```
/// `Failed` and `Cancelled` are terminal; a new attempt starts from `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthorizationState {
    /// Not started.
    #[default]
    Idle,
    /// The authorization URL was shown; waiting for the user to paste a code.
    AwaitingCode {
        /// The authorization URL shown to the user.
        auth_url: String,
    },
    /// A code was entered and is being exchanged.
    CodeReceived,
    /// A usable token is available.
    Authorized {
        /// The obtained token (access token only, not full struct).
        access_token_preview: String,
    },
    /// Authorization failed.
    Failed {
        /// Error message.
        error: String,
    },
    /// The flow was cancelled.
    Cancelled,
}

impl AuthorizationState {
    /// Get a user-friendly message.
    #[must_use]
    pub const fn message(&self) -> &str {
        match self {
            Self::Idle => "Ready to authenticate",
            Self::AwaitingCode { .. } => "Waiting for the authorization code...",
            Self::CodeReceived => "Exchanging authorization code...",
            Self::Authorized { .. } => "Authorization successful",
            Self::Failed { .. } => "Authorization failed",
            Self::Cancelled => "Authorization cancelled",
        }
    }

    /// Get a preview of an access token (first 8 chars + ...).
    #[must_use]
    pub fn token_preview(token: &str) -> String {
        match token.char_indices().nth(8) {
            Some((end, _)) if token.len() > 12 => format!("{}...", &token[..end]),
            _ => token.to_string(),
        }
    }
}
