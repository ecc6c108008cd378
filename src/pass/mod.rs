//! Passes and their validity rules
//!
//! A pass is either permanent or temporary. Validity depends only on the
//! checked instant and the pass itself, never on who holds it.
//!
//! # Usage Example
//!
//! ```rust
//! use employee_pass_registry::pass::*;
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2022, 5, 15, 0, 0, 0).unwrap();
//! let pass = Pass::temporary(start, end);
//!
//! assert!(pass.validate(Utc.with_ymd_and_hms(2022, 5, 10, 12, 0, 0).unwrap()));
//! assert!(!pass.validate(Utc.with_ymd_and_hms(2022, 5, 16, 0, 0, 0).unwrap()));
//! assert!(Pass::Permanent.validate(Utc::now()));
//! ```

#[allow(clippy::module_inception)]
pub mod pass;
pub mod temporary;

// Re-export all public types for convenience
pub use pass::Pass;
pub use temporary::TemporaryPass;
