//! Wall-clock source for timestamps written to storage.

use chrono::{DateTime, Utc};

/// Supplies "now" to anything that stamps persisted records, so creation
/// times can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host's UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
