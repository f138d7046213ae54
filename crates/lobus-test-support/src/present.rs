//! Test presenter: records everything written to the participant.

use std::sync::{Arc, Mutex};

use lobus_core::present::Presenter;

/// A presenter that records every `say` and `write` call as one entry.
///
/// Clones share the same buffer, so a clone can be handed to the code under
/// test while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything presented so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Returns how many entries exactly equal `line`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn count(&self, line: &str) -> usize {
        self.lines.lock().unwrap().iter().filter(|l| *l == line).count()
    }

    /// Returns whether nothing has been presented.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

impl Presenter for RecordingPresenter {
    fn say(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_owned());
    }

    fn write(&mut self, text: &str) {
        self.lines.lock().unwrap().push(text.to_owned());
    }
}
