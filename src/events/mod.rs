//! Notifications and their broadcast bus
//!
//! The registry reports every state change through a [`NotificationBus`]
//! without knowing how, or whether, the notification is displayed.
//!
//! # Usage Example
//!
//! ```rust
//! use employee_pass_registry::events::*;
//! use employee_pass_registry::employee::Employee;
//!
//! let mut bus = NotificationBus::new();
//! bus.subscribe(|notification| println!("{}", notification));
//!
//! let employee = Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345");
//! bus.publish(&Notification::new(NotificationKind::Registered, &employee));
//! ```

pub mod bus;
pub mod notification;

// Re-export all public types for convenience
pub use bus::*;
pub use notification::*;
