//! Core types and identifiers for the pass registry
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the registry.
//!
//! # Overview
//!
//! - **Identifiers**: caller-assigned employee ids and bus listener handles
//! - **Enums**: pass kinds, access decisions and output formats
//! - **Configuration**: command line and file configuration with validation
//!
//! # Usage Example
//!
//! ```rust
//! use employee_pass_registry::types::*;
//!
//! let id = EmployeeId::new(1);
//! assert_eq!(id.to_string(), "1");
//!
//! let decision = AccessDecision::from(true);
//! assert!(decision.is_granted());
//!
//! let config = RegistryConfig {
//!     generate_count: 10,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
