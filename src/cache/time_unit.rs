//! Time Unit Module
//!
//! Granularity of the timeout arithmetic used by the age sweep.

use std::time::Duration;

// == Time Unit ==
/// Unit in which a cache timeout is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    // == To Duration ==
    /// Converts an amount of this unit into a [`Duration`].
    ///
    /// Coarse units saturate instead of overflowing, so a huge timeout
    /// clamps to the largest representable duration.
    pub fn to_duration(self, amount: u64) -> Duration {
        match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(amount),
            TimeUnit::Microseconds => Duration::from_micros(amount),
            TimeUnit::Milliseconds => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount.saturating_mul(60)),
            TimeUnit::Hours => Duration::from_secs(amount.saturating_mul(3_600)),
            TimeUnit::Days => Duration::from_secs(amount.saturating_mul(86_400)),
        }
    }
}

impl Default for TimeUnit {
    /// Milliseconds is the fallback granularity.
    fn default() -> Self {
        TimeUnit::Milliseconds
    }
}
