//! The access registry
//!
//! This module contains the AccessRegistry struct: the employee collection,
//! pass issuance, access checks and the membership queries.

use chrono::{DateTime, NaiveDate, Utc};
use std::slice;
use tracing::warn;

use crate::employee::EmployeeHandle;
use crate::events::{Notification, NotificationBus, NotificationKind};
use crate::pass::Pass;
use crate::registry_event;
use crate::types::{AccessDecision, EmployeeId, ListenerId};

/// In-memory registry of employees and their passes
///
/// Employees are kept in registration order. Ids are not checked for
/// uniqueness. Every mutation and access check is broadcast on the
/// registry's [`NotificationBus`].
#[derive(Debug, Default)]
pub struct AccessRegistry {
    employees: Vec<EmployeeHandle>,
    notifications: NotificationBus,
}

impl AccessRegistry {
    /// Create an empty registry with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a notification listener
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Notification) + 'static,
    {
        self.notifications.subscribe(listener)
    }

    /// Remove a notification listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifications.unsubscribe(id)
    }

    /// The registry's notification bus
    pub fn notifications(&self) -> &NotificationBus {
        &self.notifications
    }

    /// Append an employee to the registry
    ///
    /// Duplicated ids, or the same handle registered twice, are accepted.
    pub fn register_employee(&mut self, employee: EmployeeHandle) {
        let notification = Notification::new(NotificationKind::Registered, &employee.borrow());
        registry_event!(
            debug,
            "Employee registered",
            employee_id = employee.id().value(),
            position = self.employees.len(),
        );
        self.employees.push(employee);
        self.notifications.publish(&notification);
    }

    /// Append a pass to an employee's passes
    ///
    /// Works on the handle directly: the employee does not have to be
    /// registered, and issuing never changes registry membership.
    pub fn issue_pass(&self, employee: &EmployeeHandle, pass: Pass) {
        if let Some(temporary) = pass.as_temporary() {
            if !temporary.is_well_formed() {
                warn!(
                    employee_id = %employee.id(),
                    start = %temporary.start,
                    end = %temporary.end,
                    "Issuing temporary pass that ends before it starts; it will never validate"
                );
            }
        }

        employee.push_pass(pass);
        registry_event!(
            debug,
            "Pass issued",
            employee_id = employee.id().value(),
            kind = tracing::field::display(pass.kind()),
        );
        let notification = Notification::new(NotificationKind::PassIssued, &employee.borrow());
        self.notifications.publish(&notification);
    }

    /// Check a pass at the current instant
    pub fn check_access(&self, employee: &EmployeeHandle, pass: &Pass) -> bool {
        self.check_access_at(employee, pass, Utc::now())
    }

    /// Check a pass at `now`, broadcast the outcome and return it
    ///
    /// Only the pass decides the outcome; the employee is used for the
    /// notification.
    pub fn check_access_at(
        &self,
        employee: &EmployeeHandle,
        pass: &Pass,
        now: DateTime<Utc>,
    ) -> bool {
        let decision = AccessDecision::from(pass.validate(now));
        registry_event!(
            debug,
            "Access checked",
            employee_id = employee.id().value(),
            decision = tracing::field::display(decision),
        );
        let notification = Notification::new(decision.into(), &employee.borrow());
        self.notifications.publish(&notification);
        decision.is_granted()
    }

    /// All registered employees in registration order
    pub fn list_employees(&self) -> slice::Iter<'_, EmployeeHandle> {
        self.employees.iter()
    }

    /// All registered employees as a slice
    pub fn employees(&self) -> &[EmployeeHandle] {
        &self.employees
    }

    /// Registered employees owning at least one permanent pass, in registration order
    pub fn employees_with_permanent_pass(&self) -> Vec<EmployeeHandle> {
        self.employees
            .iter()
            .filter(|employee| employee.borrow().has_permanent_pass())
            .cloned()
            .collect()
    }

    /// Registered employees with a temporary pass ending on the calendar date of `date`
    ///
    /// Both sides are truncated to the date; time of day is ignored.
    pub fn employees_with_temporary_pass_expiring_on(
        &self,
        date: DateTime<Utc>,
    ) -> Vec<EmployeeHandle> {
        self.employees_with_temporary_pass_expiring_on_date(date.date_naive())
    }

    /// Registered employees with a temporary pass ending on `date`
    pub fn employees_with_temporary_pass_expiring_on_date(
        &self,
        date: NaiveDate,
    ) -> Vec<EmployeeHandle> {
        self.employees
            .iter()
            .filter(|employee| employee.borrow().has_temporary_pass_expiring_on(date))
            .cloned()
            .collect()
    }

    /// Registered employees with a temporary pass ending today (UTC)
    pub fn employees_with_temporary_pass_expiring_today(&self) -> Vec<EmployeeHandle> {
        self.employees_with_temporary_pass_expiring_on(Utc::now())
    }

    /// First registered employee with the given id
    pub fn find_employee(&self, id: EmployeeId) -> Option<&EmployeeHandle> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Whether this exact employee object is registered
    pub fn contains(&self, employee: &EmployeeHandle) -> bool {
        self.employees.iter().any(|registered| registered.ptr_eq(employee))
    }

    /// Number of registered employees
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Whether no employee is registered
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
