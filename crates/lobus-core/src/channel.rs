//! Line channel abstraction.
//!
//! A participant talks to the bundle one line at a time. Every call to
//! [`LineChannel::next_line`] is a single request for exactly one reply: the
//! caller suspends until the transport delivers a line, then resumes with it.
//! Taking `&mut self` means no second read can be outstanding while the first
//! is pending.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;
use tracing::warn;

/// Asynchronous source of participant input, one line per request.
#[async_trait]
pub trait LineChannel: Send {
    /// Waits for the next line of input.
    ///
    /// Returns `None` once the participant has gone away and no further
    /// input will ever be delivered.
    async fn next_line(&mut self) -> Option<String>;
}

#[async_trait]
impl<T: LineChannel + ?Sized> LineChannel for &mut T {
    async fn next_line(&mut self) -> Option<String> {
        (**self).next_line().await
    }
}

#[async_trait]
impl<T: LineChannel + ?Sized> LineChannel for Box<T> {
    async fn next_line(&mut self) -> Option<String> {
        (**self).next_line().await
    }
}

#[async_trait]
impl LineChannel for mpsc::Receiver<String> {
    async fn next_line(&mut self) -> Option<String> {
        self.recv().await
    }
}

#[async_trait]
impl LineChannel for mpsc::UnboundedReceiver<String> {
    async fn next_line(&mut self) -> Option<String> {
        self.recv().await
    }
}

/// Adapts any buffered async reader (stdin, a TCP stream half) into a
/// [`LineChannel`]. Line terminators (`\n` or `\r\n`) are stripped.
#[derive(Debug)]
pub struct LinesChannel<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> LinesChannel<R> {
    /// Wraps `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineChannel for LinesChannel<R> {
    async fn next_line(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "line channel read failed, treating as disconnect");
                None
            }
        }
    }
}
