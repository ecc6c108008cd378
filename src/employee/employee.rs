//! Core employee struct and methods
//!
//! This module contains the Employee struct, its opaque password and the
//! predicates the registry queries use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pass::Pass;
use crate::types::EmployeeId;

/// Opaque password string
///
/// Stored as given and never checked. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a password string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The stored string
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// An employee and the passes they own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned identifier
    pub id: EmployeeId,
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
    /// Position title
    pub position: String,
    /// Login name
    pub login: String,
    /// Password, stored but not validated
    pub password: Password,
    /// Owned passes in issue order
    #[serde(default)]
    pub passes: Vec<Pass>,
}

impl Employee {
    /// Create an employee with no passes
    pub fn new(
        id: impl Into<EmployeeId>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        position: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            position: position.into(),
            login: login.into(),
            password: Password::new(password),
            passes: Vec::new(),
        }
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "id - First Last - Position", as used in employee listings
    pub fn listing_line(&self) -> String {
        format!("{} - {} - {}", self.id, self.display_name(), self.position)
    }

    /// Append a pass to the owned collection
    pub fn add_pass(&mut self, pass: Pass) {
        self.passes.push(pass);
    }

    /// Whether at least one owned pass is permanent
    pub fn has_permanent_pass(&self) -> bool {
        self.passes.iter().any(Pass::is_permanent)
    }

    /// Whether at least one owned temporary pass ends on `date`
    pub fn has_temporary_pass_expiring_on(&self, date: NaiveDate) -> bool {
        self.passes.iter().any(|pass| pass.expires_on(date))
    }

    /// Number of owned passes
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.listing_line())
    }
}
