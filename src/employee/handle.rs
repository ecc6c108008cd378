//! Shared employee handles
//!
//! Pass issuance works on the employee object itself rather than on a
//! registry lookup, so the same employee may be reachable from the caller and
//! from the registry at once. [`EmployeeHandle`] is that shared reference.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::employee::Employee;
use crate::pass::Pass;
use crate::types::EmployeeId;

/// Reference-counted handle to an [`Employee`]
///
/// Cloning the handle shares the employee; mutations through one clone are
/// visible through every other. Not thread-safe: the registry is single-threaded.
#[derive(Clone)]
pub struct EmployeeHandle(Rc<RefCell<Employee>>);

impl EmployeeHandle {
    /// Wrap an employee in a new handle
    pub fn new(employee: Employee) -> Self {
        Self(Rc::new(RefCell::new(employee)))
    }

    /// Borrow the employee for reading
    ///
    /// Panics if the employee is currently being mutated through another clone.
    pub fn borrow(&self) -> Ref<'_, Employee> {
        self.0.borrow()
    }

    /// The employee's id
    pub fn id(&self) -> EmployeeId {
        self.0.borrow().id
    }

    /// The employee's display name
    pub fn display_name(&self) -> String {
        self.0.borrow().display_name()
    }

    /// Clone the employee out of the handle
    pub fn snapshot(&self) -> Employee {
        self.0.borrow().clone()
    }

    /// Whether two handles point at the same employee object
    pub fn ptr_eq(&self, other: &EmployeeHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn push_pass(&self, pass: Pass) {
        self.0.borrow_mut().add_pass(pass);
    }
}

impl From<Employee> for EmployeeHandle {
    fn from(employee: Employee) -> Self {
        Self::new(employee)
    }
}

impl fmt::Debug for EmployeeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(employee) => f.debug_tuple("EmployeeHandle").field(&*employee).finish(),
            Err(_) => f.write_str("EmployeeHandle(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let handle = EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "x"));
        let other = handle.clone();

        other.push_pass(Pass::Permanent);
        assert_eq!(handle.borrow().pass_count(), 1);
        assert!(handle.ptr_eq(&other));
    }

    #[test]
    fn test_distinct_handles_are_not_ptr_eq() {
        let employee = Employee::new(1, "Smith", "John", "Manager", "jsmith", "x");
        let a = EmployeeHandle::new(employee.clone());
        let b = EmployeeHandle::new(employee);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let handle = EmployeeHandle::from(Employee::new(2, "Doe", "Jane", "Engineer", "jdoe", "x"));
        let snapshot = handle.snapshot();
        handle.push_pass(Pass::Permanent);
        assert_eq!(snapshot.pass_count(), 0);
        assert_eq!(handle.display_name(), "Jane Doe");
    }
}
