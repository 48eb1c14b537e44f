//! Standard input read on a dedicated thread.
//!
//! A pending read on the thread never blocks runtime shutdown, so an
//! interrupted prompt does not keep the process alive until Enter is pressed.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::oneshot;

/// Source of input lines for a prompt.
#[async_trait]
pub trait LineSource: Send {
    /// Reads the next line, `None` at end of input.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineSource for R {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.read_line(&mut line).await?;
        Ok((read > 0).then_some(line))
    }
}

type LineReply = oneshot::Sender<io::Result<Option<String>>>;

/// Lines of the process's standard input.
///
/// A detached thread reads one line per request, so nothing is consumed
/// until the prompt asks for it.
#[derive(Debug)]
pub struct StdinLines {
    requests: mpsc::Sender<LineReply>,
}

impl StdinLines {
    /// Starts the reader thread.
    ///
    /// # Errors
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn() -> io::Result<Self> {
        let (requests, pending) = mpsc::channel::<LineReply>();

        thread::Builder::new()
            .name("tukija-stdin".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                for reply in pending {
                    let mut line = String::new();
                    let result = match stdin.lock().read_line(&mut line) {
                        Ok(0) => Ok(None),
                        Ok(_) => Ok(Some(line)),
                        Err(e) => Err(e),
                    };
                    // The requester may have been cancelled meanwhile.
                    let _ = reply.send(result);
                }
            })?;

        Ok(Self { requests })
    }
}

fn reader_stopped() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "standard input reader stopped")
}

#[async_trait]
impl LineSource for StdinLines {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let (reply, response) = oneshot::channel();
        self.requests.send(reply).map_err(|_| reader_stopped())?;
        response.await.map_err(|_| reader_stopped())?
    }
}
