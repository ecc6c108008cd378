//! Registry reports
//!
//! This module gathers the employee listing and query results into a
//! serializable report. Passwords never appear in a report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::employee::EmployeeHandle;
use crate::pass::Pass;
use crate::registry::{AccessRegistry, RegistryResult};
use crate::types::{AccessDecision, EmployeeId, OutputFormat};

/// Password-free view of an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee id
    pub id: EmployeeId,
    /// "First Last"
    pub name: String,
    /// Position title
    pub position: String,
    /// Login name
    pub login: String,
    /// Descriptions of owned passes in issue order
    pub passes: Vec<String>,
}

impl EmployeeSummary {
    /// Summarize the employee behind a handle
    pub fn from_handle(handle: &EmployeeHandle) -> Self {
        let employee = handle.borrow();
        Self {
            id: employee.id,
            name: employee.display_name(),
            position: employee.position.clone(),
            login: employee.login.clone(),
            passes: employee.passes.iter().map(Pass::describe).collect(),
        }
    }

    /// "id - First Last - Position"
    pub fn listing_line(&self) -> String {
        format!("{} - {} - {}", self.id, self.name, self.position)
    }
}

/// Result of one access check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessCheckRecord {
    /// Employee presenting the pass
    pub employee_id: EmployeeId,
    /// "First Last"
    pub employee_name: String,
    /// Description of the checked pass
    pub pass: String,
    /// Instant the pass was checked at
    pub checked_at: DateTime<Utc>,
    /// Outcome
    pub decision: AccessDecision,
}

impl AccessCheckRecord {
    /// Record a check of `pass` presented by `employee`
    pub fn new(
        employee: &EmployeeHandle,
        pass: &Pass,
        checked_at: DateTime<Utc>,
        granted: bool,
    ) -> Self {
        Self {
            employee_id: employee.id(),
            employee_name: employee.display_name(),
            pass: pass.describe(),
            checked_at,
            decision: AccessDecision::from(granted),
        }
    }
}

/// Snapshot of a registry and its query results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryReport {
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Date used for the expiring temporary pass query
    pub expiry_date: NaiveDate,
    /// Every registered employee in registration order
    pub employees: Vec<EmployeeSummary>,
    /// Employees with at least one permanent pass
    pub permanent_pass_holders: Vec<EmployeeSummary>,
    /// Employees with a temporary pass ending on `expiry_date`
    pub expiring_temporary_pass_holders: Vec<EmployeeSummary>,
    /// Access checks performed before the report was built
    #[serde(default)]
    pub access_checks: Vec<AccessCheckRecord>,
}

impl RegistryReport {
    /// Run the listing and both queries against `registry`
    pub fn build(registry: &AccessRegistry, expiry_date: NaiveDate) -> Self {
        let summarize = |handles: &[EmployeeHandle]| -> Vec<EmployeeSummary> {
            handles.iter().map(EmployeeSummary::from_handle).collect()
        };

        Self {
            generated_at: Utc::now(),
            expiry_date,
            employees: registry.list_employees().map(EmployeeSummary::from_handle).collect(),
            permanent_pass_holders: summarize(&registry.employees_with_permanent_pass()),
            expiring_temporary_pass_holders: summarize(
                &registry.employees_with_temporary_pass_expiring_on_date(expiry_date),
            ),
            access_checks: Vec::new(),
        }
    }

    /// Attach access check results
    pub fn with_access_checks(mut self, checks: Vec<AccessCheckRecord>) -> Self {
        self.access_checks = checks;
        self
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> RegistryResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Pretty JSON
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable lines
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Employees ({}):", self.employees.len());
        for employee in &self.employees {
            let _ = writeln!(out, "  {}", employee.listing_line());
            for pass in &employee.passes {
                let _ = writeln!(out, "    {}", pass);
            }
        }

        if !self.access_checks.is_empty() {
            let _ = writeln!(out, "\nAccess checks:");
            for check in &self.access_checks {
                let _ = writeln!(
                    out,
                    "  {} at {}: {} -> {}",
                    check.employee_name,
                    check.checked_at.format("%Y-%m-%d %H:%M:%S"),
                    check.pass,
                    check.decision
                );
            }
        }

        let _ = writeln!(out, "\nPermanent pass holders:");
        if self.permanent_pass_holders.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for employee in &self.permanent_pass_holders {
            let _ = writeln!(out, "  {} has a permanent pass.", employee.name);
        }

        let _ = writeln!(out, "\nTemporary passes expiring on {}:", self.expiry_date);
        if self.expiring_temporary_pass_holders.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for employee in &self.expiring_temporary_pass_holders {
            let _ = writeln!(
                out,
                "  {} has a temporary pass expiring on {}.",
                employee.name, self.expiry_date
            );
        }

        out
    }
}
