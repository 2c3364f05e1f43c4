//! # Clock Abstraction
//!
//! Year-stamped identifiers and M-Pesa references read wall-clock time.
//! Those reads flow through the [`Clock`] trait so generators stay
//! deterministic under test: production code uses [`SystemClock`], tests
//! pin an instant with [`FixedClock`].

use chrono::{DateTime, Utc};

/// A source of the current UTC time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current 4-digit calendar year.
    fn year(&self) -> i32 {
        use chrono::Datelike;
        self.now().year()
    }
}

/// Reads the real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant. Test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to the given instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
