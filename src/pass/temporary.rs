//! Time-bounded passes
//!
//! This module contains the TemporaryPass struct and its validity window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pass valid between two instants, both ends inclusive
///
/// `start <= end` is expected but not enforced. A pass whose end precedes
/// its start is accepted and simply never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporaryPass {
    /// First instant at which the pass is valid
    pub start: DateTime<Utc>,
    /// Last instant at which the pass is valid
    pub end: DateTime<Utc>,
}

impl TemporaryPass {
    /// Create a temporary pass covering `start..=end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Check whether the pass is valid at `now`
    pub fn validate(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    /// Whether the pass ends on the given calendar date, ignoring time of day
    pub fn expires_on(&self, date: NaiveDate) -> bool {
        self.end.date_naive() == date
    }

    /// Whether the window is ordered (`start <= end`)
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Human-readable summary
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TemporaryPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temporary Pass: {} - {}",
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
