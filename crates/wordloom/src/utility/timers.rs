//! # Time Utilities

use core::fmt;
use std::time::{Duration, Instant};

/// Time an operation; return (duration, result).
pub fn timeit<F, R>(f: F) -> (Duration, R)
where
    F: FnOnce() -> R,
{
    let t0 = Instant::now();
    let ret = f();
    let t1 = Instant::now();
    (t1 - t0, ret)
}

/// A whole-second duration split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    /// Whole days.
    pub days: u64,

    /// Hours, `0..24`.
    pub hours: u64,

    /// Minutes, `0..60`.
    pub minutes: u64,

    /// Seconds, `0..60`.
    pub seconds: u64,
}

impl DurationParts {
    /// Factor a count of seconds.
    pub fn from_secs(secs: u64) -> Self {
        let (days, rem) = (secs / 86_400, secs % 86_400);
        let (hours, rem) = (rem / 3_600, rem % 3_600);
        let (minutes, seconds) = (rem / 60, rem % 60);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl From<Duration> for DurationParts {
    fn from(d: Duration) -> Self {
        Self::from_secs(d.as_secs())
    }
}

impl fmt::Display for DurationParts {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d ", self.days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
