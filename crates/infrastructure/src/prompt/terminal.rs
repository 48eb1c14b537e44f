//! Line-oriented prompt over async reader and writer halves.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use tukija_application::ports::{PromptError, UserPrompt};

use super::stdin::{LineSource, StdinLines};

/// Prompt that writes to one stream and reads lines from another.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
pub struct TerminalPrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
    open_browser: bool,
}

impl TerminalPrompt<StdinLines, Stdout> {
    /// Prompt on the process's standard input and output.
    ///
    /// # Errors
    /// Returns an error if the standard input reader cannot be started.
    pub fn stdio() -> io::Result<Self> {
        Ok(Self::new(StdinLines::spawn()?, tokio::io::stdout()))
    }
}

impl<R, W> TerminalPrompt<R, W>
where
    R: LineSource,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a prompt over the given streams.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
            open_browser: false,
        }
    }

    /// Also opens authorization URLs in the default browser.
    #[must_use]
    pub const fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }

    async fn write_line(&self, text: &str) -> Result<(), PromptError> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> UserPrompt for TerminalPrompt<R, W>
where
    R: LineSource,
    W: AsyncWrite + Unpin + Send,
{
    async fn display_message(&self, text: &str) -> Result<(), PromptError> {
        self.write_line(text).await
    }

    async fn request_line(&self, prompt: &str) -> Result<String, PromptError> {
        {
            let mut output = self.output.lock().await;
            output.write_all(format!("{prompt}: ").as_bytes()).await?;
            output.flush().await?;
        }

        let line = self
            .input
            .lock()
            .await
            .next_line()
            .await?
            .ok_or(PromptError::Closed)?;

        let line = line.trim();
        if line.is_empty() {
            return Err(PromptError::Empty);
        }
        Ok(line.to_string())
    }

    async fn display_authorization_url(&self, url: &str) -> Result<(), PromptError> {
        self.display_message(&format!(
            "Open the following link in your browser, authorize Tukija and paste the code:\n{url}"
        ))
        .await?;

        if self.open_browser {
            match open::that_detached(url) {
                Ok(()) => debug!("Opened authorization URL in browser"),
                Err(e) => warn!(error = %e, "Could not open browser"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prompt(input: &'static [u8]) -> TerminalPrompt<&'static [u8], Vec<u8>> {
        TerminalPrompt::new(input, Vec::new())
    }

    #[tokio::test]
    async fn test_request_line_trims_input() {
        let prompt = prompt(b"  4/ABC123 \r\n");
        let code = prompt.request_line("Code").await.expect("line");
        assert_eq!(code, "4/ABC123");

        let (_, output) = prompt.into_inner();
        assert_eq!(String::from_utf8(output).expect("utf8"), "Code: ");
    }

    #[tokio::test]
    async fn test_end_of_input_is_closed() {
        let err = prompt(b"").request_line("Code").await.unwrap_err();
        assert!(matches!(err, PromptError::Closed));
    }

    #[tokio::test]
    async fn test_blank_line_is_empty() {
        let err = prompt(b"   \n").request_line("Code").await.unwrap_err();
        assert!(matches!(err, PromptError::Empty));
    }

    #[tokio::test]
    async fn test_lines_are_read_in_order() {
        let prompt = prompt(b"first\nsecond\n");
        assert_eq!(prompt.request_line("a").await.expect("line"), "first");
        assert_eq!(prompt.request_line("b").await.expect("line"), "second");
    }

    #[tokio::test]
    async fn test_authorization_url_is_shown() {
        let prompt = prompt(b"");
        prompt
            .display_authorization_url("https://accounts.google.com/o/oauth2/auth?x=1")
            .await
            .expect("display");

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).expect("utf8");
        assert!(output.starts_with("Open the following link"));
        assert!(output.ends_with("https://accounts.google.com/o/oauth2/auth?x=1\n"));
    }
}
