//! Pinned clock for asserting on `created_at`.

use chrono::{DateTime, Utc};
use lobus_core::clock::Clock;

/// Always reports the wrapped instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
