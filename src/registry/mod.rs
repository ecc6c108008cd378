//! The access registry and its runtime support
//!
//! This module contains the registry itself, reporting, error handling and
//! logging configuration.
//!
//! # Overview
//!
//! - **AccessRegistry**: employee collection, pass issuance, access checks and queries
//! - **RegistryReport**: listing and query results rendered as text or JSON
//! - **RegistryError**: errors for configuration, rosters and output
//! - **LoggingConfig**: tracing subscriber setup and the notification listener
//!
//! # Usage Example
//!
//! ```rust
//! use employee_pass_registry::registry::*;
//! use employee_pass_registry::employee::{Employee, EmployeeHandle};
//! use employee_pass_registry::pass::Pass;
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let mut registry = AccessRegistry::new();
//! registry.subscribe(|notification| println!("{}", notification));
//!
//! let john = EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345"));
//! registry.register_employee(john.clone());
//!
//! let pass = Pass::temporary(
//!     Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2022, 5, 15, 0, 0, 0).unwrap(),
//! );
//! registry.issue_pass(&john, pass);
//!
//! let inside = Utc.with_ymd_and_hms(2022, 5, 10, 12, 0, 0).unwrap();
//! assert!(registry.check_access_at(&john, &pass, inside));
//! assert!(registry.employees_with_permanent_pass().is_empty());
//!
//! let expiring = registry.employees_with_temporary_pass_expiring_on_date(
//!     NaiveDate::from_ymd_opt(2022, 5, 15).unwrap(),
//! );
//! assert_eq!(expiring.len(), 1);
//! ```

pub mod access_registry;
pub mod error;
pub mod logging;
pub mod report;

// Re-export all public types for convenience
pub use access_registry::*;
pub use error::*;
pub use logging::*;
pub use report::*;
