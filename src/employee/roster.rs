//! Roster files and the built-in sample roster
//!
//! A roster is a JSON document listing employees together with the passes to
//! issue to them. Loading a roster into a registry registers each employee and
//! then issues its passes one by one, so every step produces its notification.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::employee::{Employee, EmployeeHandle};
use crate::pass::Pass;
use crate::registry::{AccessRegistry, RegistryError, RegistryResult};

/// A list of employees with the passes they should receive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Employees in registration order; each `passes` list is issued after registration
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Create a roster from employees
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// The built-in sample: John Smith with a temporary pass for 1-15 May 2022
    pub fn sample() -> Self {
        let mut employee = Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345");
        if let (Some(start), Some(end)) = (
            Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).single(),
            Utc.with_ymd_and_hms(2022, 5, 15, 0, 0, 0).single(),
        ) {
            employee.add_pass(Pass::temporary(start, end));
        }
        Self::new(vec![employee])
    }

    /// Parse a roster from a JSON string
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| RegistryError::roster_error(format!("Invalid roster JSON: {}", e)))
    }

    /// Load a roster from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RegistryError::roster_error(format!(
                "Roster file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let roster = Self::from_json(&content)?;
        info!("Loaded {} employees from roster {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Write the roster as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> RegistryResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Number of employees in the roster
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster lists no employees
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Register every employee, then issue their listed passes
    ///
    /// Returns the handles in roster order.
    pub fn load_into(self, registry: &mut AccessRegistry) -> Vec<EmployeeHandle> {
        let mut handles = Vec::with_capacity(self.employees.len());

        for mut employee in self.employees {
            let passes = std::mem::take(&mut employee.passes);
            let handle = EmployeeHandle::new(employee);
            registry.register_employee(handle.clone());

            for pass in passes {
                registry.issue_pass(&handle, pass);
            }
            debug!(employee_id = %handle.id(), "Roster entry loaded");
            handles.push(handle);
        }

        handles
    }
}
