//! Employee modelling, rosters and demo generation
//!
//! # Overview
//!
//! - **Employee**: identity fields, an opaque password and owned passes
//! - **EmployeeHandle**: shared handle used by the registry and its callers
//! - **Roster**: JSON roster files and the built-in sample
//! - **EmployeeGenerator**: seeded random population for demos
//!
//! # Usage Example
//!
//! ```rust
//! use employee_pass_registry::employee::*;
//! use employee_pass_registry::pass::Pass;
//!
//! let handle = EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345"));
//! assert_eq!(handle.display_name(), "John Smith");
//!
//! let roster = Roster::sample();
//! assert_eq!(roster.len(), 1);
//! ```

#[allow(clippy::module_inception)]
pub mod employee;
pub mod generator;
pub mod handle;
pub mod roster;

// Re-export all public types for convenience
pub use employee::{Employee, Password};
pub use generator::EmployeeGenerator;
pub use handle::EmployeeHandle;
pub use roster::Roster;
