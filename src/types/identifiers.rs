//! Identifier types for the pass registry
//!
//! Employee identifiers are caller-assigned integers; the registry never
//! allocates or checks them. Listener identifiers are handed out by the
//! notification bus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an employee, assigned by whoever creates the employee record
///
/// Uniqueness is not enforced anywhere: two employees may share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Create an employee id from its numeric value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The numeric value of this id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(EmployeeId)
            .map_err(|e| format!("Invalid employee id '{}': {}", s, e))
    }
}

/// Handle returned when a listener subscribes to the notification bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LISTENER_{}", self.0)
    }
}
