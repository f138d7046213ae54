//! Test channel: replays participant replies from a script.

use std::collections::VecDeque;

use async_trait::async_trait;
use lobus_core::channel::LineChannel;

/// A line channel that hands out a fixed sequence of replies, one per read,
/// and reports the participant as gone once the script runs out.
///
/// Lend it to the code under test as `&mut channel` to inspect
/// [`ScriptedChannel::reads`] afterwards.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    replies: VecDeque<String>,
    reads: usize,
}

impl ScriptedChannel {
    /// Create a channel that will deliver `replies` in order.
    #[must_use]
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Number of reads requested so far, including the one that found the
    /// script exhausted.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Replies not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

#[async_trait]
impl LineChannel for ScriptedChannel {
    async fn next_line(&mut self) -> Option<String> {
        self.reads += 1;
        self.replies.pop_front()
    }
}
