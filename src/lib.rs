//! Employee Pass Registry
//!
//! An in-memory registry of employees and the access passes they hold.
//!
//! # Overview
//!
//! Employees are registered into an [`AccessRegistry`], receive permanent or
//! temporary [`Pass`]es, and present them at access-check time. The registry
//! answers who holds a permanent pass and whose temporary pass expires on a
//! given date. Every registration, issuance and check is broadcast as a
//! [`Notification`] to any subscribed listener.
//!
//! ## Quick Start
//!
//! ```rust
//! use employee_pass_registry::*;
//!
//! let mut registry = AccessRegistry::new();
//! registry.subscribe(|notification| println!("{}", notification));
//!
//! let john = EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345"));
//! registry.register_employee(john.clone());
//! registry.issue_pass(&john, Pass::Permanent);
//!
//! assert!(registry.check_access(&john, &Pass::Permanent));
//! assert_eq!(registry.employees_with_permanent_pass().len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`pass`]: Pass variants and validity rules
//! - [`employee`]: Employees, shared handles, rosters and demo generation
//! - [`events`]: Notifications and the broadcast bus
//! - [`registry`]: The registry, reports, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │    Pass     │    │  Employee   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Permanent   │◄───┤ Handles     │
//! │ Enums       │    │ Temporary   │    │ Roster      │
//! │ Config      │    │             │    │ Generator   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐
//! │   Events    │    │  Registry   │
//! │             │    │             │
//! │ Notification│◄───┤ Queries     │
//! │ Bus         │    │ Report      │
//! └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod employee;
pub mod events;
pub mod pass;
pub mod registry;

pub mod types;

// Core types and identifiers
pub use types::{
    AccessDecision,
    ConfigValidationError,
    // Identifiers
    EmployeeId,
    ListenerId,
    OutputFormat,
    // Enums
    PassKind,
    // Configuration
    RegistryConfig,
};

// Passes
pub use pass::{Pass, TemporaryPass};

// Employees
pub use employee::{Employee, EmployeeGenerator, EmployeeHandle, Password, Roster};

// Notifications
pub use events::{Notification, NotificationBus, NotificationKind};

// Registry and runtime support
pub use registry::{
    AccessCheckRecord, AccessRegistry, EmployeeSummary, LoggingConfig, RegistryError,
    RegistryReport, RegistryResult,
};
