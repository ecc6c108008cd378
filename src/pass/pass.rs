//! The pass tagged union
//!
//! This module contains the Pass enum shared by both pass variants.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pass::TemporaryPass;
use crate::types::PassKind;

/// An access credential held by an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pass {
    /// Always valid
    Permanent,
    /// Valid inside its window
    Temporary(TemporaryPass),
}

impl Pass {
    /// Create a temporary pass covering `start..=end`
    pub fn temporary(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Pass::Temporary(TemporaryPass::new(start, end))
    }

    /// Check whether the pass is valid at `now`
    pub fn validate(&self, now: DateTime<Utc>) -> bool {
        match self {
            Pass::Permanent => true,
            Pass::Temporary(temporary) => temporary.validate(now),
        }
    }

    /// Human-readable summary
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The variant of this pass
    pub fn kind(&self) -> PassKind {
        match self {
            Pass::Permanent => PassKind::Permanent,
            Pass::Temporary(_) => PassKind::Temporary,
        }
    }

    /// Whether this is a permanent pass
    pub fn is_permanent(&self) -> bool {
        matches!(self, Pass::Permanent)
    }

    /// The temporary window, if this is a temporary pass
    pub fn as_temporary(&self) -> Option<&TemporaryPass> {
        match self {
            Pass::Temporary(temporary) => Some(temporary),
            Pass::Permanent => None,
        }
    }

    /// Whether this is a temporary pass ending on `date`
    pub fn expires_on(&self, date: NaiveDate) -> bool {
        self.as_temporary().is_some_and(|temporary| temporary.expires_on(date))
    }
}

impl From<TemporaryPass> for Pass {
    fn from(temporary: TemporaryPass) -> Self {
        Pass::Temporary(temporary)
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Permanent => write!(f, "Permanent Pass"),
            Pass::Temporary(temporary) => write!(f, "{}", temporary),
        }
    }
}
