//! Clock port for time-related operations.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Token expiry and Daraja timestamps are computed against this trait so
/// tests can move time forward without sleeping.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
