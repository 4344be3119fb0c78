//! Watermark domain type
//!
//! The watermark is the `from_date` lower bound sent to the review API.
//! Records older than it are considered already reported.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Unix timestamp (seconds) marking the start of the next polling window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(i64);

impl Watermark {
    /// Wraps a raw timestamp, e.g. the server-reported `current_date`
    pub fn from_timestamp(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Initial watermark: one day before `now`
    pub fn day_before(now: DateTime<Utc>) -> Self {
        Self((now - Duration::days(1)).timestamp())
    }

    /// Initial watermark for a fresh process
    pub fn initial() -> Self {
        Self::day_before(Utc::now())
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
