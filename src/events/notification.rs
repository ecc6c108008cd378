//! Registry notifications
//!
//! This module contains the notification emitted for every registration,
//! pass issuance and access check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::employee::Employee;
use crate::types::{AccessDecision, EmployeeId};

/// What a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An employee was added to the registry
    Registered,
    /// A pass was appended to an employee's passes
    PassIssued,
    /// An access check succeeded
    AccessGranted,
    /// An access check failed
    AccessDenied,
}

impl From<AccessDecision> for NotificationKind {
    fn from(decision: AccessDecision) -> Self {
        match decision {
            AccessDecision::Granted => NotificationKind::AccessGranted,
            AccessDecision::Denied => NotificationKind::AccessDenied,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Registered => write!(f, "registered"),
            NotificationKind::PassIssued => write!(f, "issued"),
            NotificationKind::AccessGranted => write!(f, "granted"),
            NotificationKind::AccessDenied => write!(f, "denied"),
        }
    }
}

/// A state change broadcast to listeners
///
/// The `Display` form is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What happened
    pub kind: NotificationKind,
    /// Id of the employee involved
    pub employee_id: EmployeeId,
    /// "First Last" of the employee involved
    pub employee_name: String,
    /// When the notification was produced
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Create a notification about `employee`
    pub fn new(kind: NotificationKind, employee: &Employee) -> Self {
        Self {
            kind,
            employee_id: employee.id,
            employee_name: employee.display_name(),
            timestamp: Utc::now(),
        }
    }

    /// The human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Registered => {
                write!(f, "Employee {} has been registered.", self.employee_name)
            }
            NotificationKind::PassIssued => {
                write!(f, "Pass has been issued to employee {}.", self.employee_name)
            }
            NotificationKind::AccessGranted => {
                write!(f, "Access granted to employee {}.", self.employee_name)
            }
            NotificationKind::AccessDenied => {
                write!(f, "Access denied to employee {}.", self.employee_name)
            }
        }
    }
}
