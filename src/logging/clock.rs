//! Injectable time source.
//!
//! The client derives the `timestamp` system parameter from a [`Clock`], and
//! the diagnostic log derives file names and line timestamps from the same
//! source. Injecting the clock keeps both deterministic under test: a
//! [`FixedClock`] produces byte-identical signed URLs and log lines on every
//! call.

use std::fmt;

use chrono::{DateTime, Utc};

/// A source of the current UTC instant.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns the current UTC instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
///
/// # Example
///
/// ```rust
/// use chrono::TimeZone;
/// use aliexpress_api::logging::{Clock, FixedClock};
///
/// let instant = chrono::Utc.with_ymd_and_hms(2023, 7, 22, 4, 26, 40).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now().timestamp_millis(), 1_690_000_000_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
