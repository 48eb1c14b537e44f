//! User prompt port
//!
//! Whatever surface talks to the user (terminal, dialog) implements this.

use std::sync::Arc;

use async_trait::async_trait;

/// Errors raised by a prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input stream ended before a line was entered.
    #[error("input closed before a line was entered")]
    Closed,

    /// The user entered a blank line.
    #[error("no input entered")]
    Empty,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability for showing text to the user and reading one line back.
///
/// Calls block until the user responds; there is no timeout.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Shows a message to the user.
    ///
    /// # Errors
    /// Returns an error if the message cannot be shown.
    async fn display_message(&self, text: &str) -> Result<(), PromptError>;

    /// Asks the user for a single line of text.
    ///
    /// The returned text is trimmed and never empty.
    ///
    /// # Errors
    /// Returns `PromptError::Closed` on end of input and `PromptError::Empty`
    /// for a blank line.
    async fn request_line(&self, prompt: &str) -> Result<String, PromptError>;

    /// Shows the authorization URL. Defaults to `display_message`.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be shown.
    async fn display_authorization_url(&self, url: &str) -> Result<(), PromptError> {
        self.display_message(&format!(
            "Open the following link in your browser, authorize Tukija and paste the code:\n{url}"
        ))
        .await
    }
}

#[async_trait]
impl<T: UserPrompt + ?Sized> UserPrompt for Arc<T> {
    async fn display_message(&self, text: &str) -> Result<(), PromptError> {
        (**self).display_message(text).await
    }

    async fn request_line(&self, prompt: &str) -> Result<String, PromptError> {
        (**self).request_line(prompt).await
    }

    async fn display_authorization_url(&self, url: &str) -> Result<(), PromptError> {
        (**self).display_authorization_url(url).await
    }
}
