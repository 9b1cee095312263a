//! Wall-clock time for recovery cooldowns and progress timestamps.

use chrono::{DateTime, Utc};

/// Source of "now". Injected so cooldown checks can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
