//! Shared test mocks and utilities for the lobus input-event bundle.

mod channel;
mod clock;
mod present;
mod repository;

pub use channel::ScriptedChannel;
pub use clock::FixedClock;
pub use present::RecordingPresenter;
pub use repository::{FailingPlayerRepository, InMemoryPlayerRepository};
