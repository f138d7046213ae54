//! Presentation abstraction.
//!
//! Presenters write text back to the participant. They must not fail or
//! suspend from the caller's point of view; write errors are logged and
//! swallowed by the implementations here.

use std::io::Write;

use tracing::warn;

/// Writes text to the participant.
pub trait Presenter: Send {
    /// Writes `line` followed by a line break.
    fn say(&mut self, line: &str);

    /// Writes `text` without a trailing line break (prompts).
    ///
    /// Defaults to [`Presenter::say`] for presenters that only deal in
    /// whole lines.
    fn write(&mut self, text: &str) {
        self.say(text);
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn say(&mut self, line: &str) {
        (**self).say(line);
    }

    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn say(&mut self, line: &str) {
        (**self).say(line);
    }

    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

/// Presenter backed by a closure; see [`from_fn`].
pub struct FnPresenter<F>(F);

/// Wraps a closure as a [`Presenter`]. Prompts and lines both go through the
/// closure.
#[must_use]
pub fn from_fn<F>(f: F) -> FnPresenter<F>
where
    F: FnMut(&str) + Send,
{
    FnPresenter(f)
}

impl<F> Presenter for FnPresenter<F>
where
    F: FnMut(&str) + Send,
{
    fn say(&mut self, line: &str) {
        (self.0)(line);
    }
}

/// Presenter over any [`Write`] sink, e.g. stdout or a socket.
#[derive(Debug)]
pub struct WriterPresenter<W> {
    sink: W,
    line_ending: &'static str,
}

impl<W: Write + Send> WriterPresenter<W> {
    /// Wraps `sink`, terminating lines with `\n`.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            line_ending: "\n",
        }
    }

    /// Overrides the line terminator, e.g. `\r\n` for telnet clients.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, parts: &[&str]) {
        let result = parts
            .iter()
            .try_for_each(|part| self.sink.write_all(part.as_bytes()))
            .and_then(|()| self.sink.flush());
        if let Err(e) = result {
            warn!(error = %e, "presenter write failed");
        }
    }
}

impl<W: Write + Send> Presenter for WriterPresenter<W> {
    fn say(&mut self, line: &str) {
        let ending = self.line_ending;
        self.emit(&[line, ending]);
    }

    fn write(&mut self, text: &str) {
        self.emit(&[text]);
    }
}
