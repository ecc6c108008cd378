//! Tests for notification delivery from the registry

use chrono::{TimeZone, Utc};
use employee_pass_registry::*;
use std::cell::RefCell;
use std::rc::Rc;

fn john() -> EmployeeHandle {
    EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345"))
}

/// Without listeners every operation still completes
#[test]
fn test_operations_without_listeners() {
    let mut registry = AccessRegistry::new();
    let john = john();
    registry.register_employee(john.clone());
    registry.issue_pass(&john, Pass::Permanent);
    assert!(registry.check_access(&john, &Pass::Permanent));
    assert!(!registry.notifications().has_listeners());
}

/// Messages carry the employee display name
#[test]
fn test_message_wording() {
    let mut registry = AccessRegistry::new();
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&messages);
    registry.subscribe(move |n| sink.borrow_mut().push(n.to_string()));

    let john = john();
    let expired = Pass::temporary(
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap(),
    );
    registry.register_employee(john.clone());
    registry.issue_pass(&john, expired);
    registry.check_access(&john, &expired);
    registry.check_access(&john, &Pass::Permanent);

    assert_eq!(
        *messages.borrow(),
        vec![
            "Employee John Smith has been registered.",
            "Pass has been issued to employee John Smith.",
            "Access denied to employee John Smith.",
            "Access granted to employee John Smith.",
        ]
    );
}

/// Every listener receives every notification, in subscription order
#[test]
fn test_multiple_listeners() {
    let mut registry = AccessRegistry::new();
    let log = Rc::new(RefCell::new(Vec::<String>::new()));

    for name in ["audit", "console"] {
        let sink = Rc::clone(&log);
        registry.subscribe(move |n| sink.borrow_mut().push(format!("{}:{}", name, n.kind)));
    }

    registry.register_employee(john());

    assert_eq!(*log.borrow(), vec!["audit:registered", "console:registered"]);
}

/// Listeners run inline, so they observe the state the call just produced
#[test]
fn test_listener_sees_issued_pass() {
    let mut registry = AccessRegistry::new();
    let john = john();
    let observed = Rc::new(RefCell::new(None));

    let watched = john.clone();
    let sink = Rc::clone(&observed);
    registry.subscribe(move |n| {
        if n.kind == NotificationKind::PassIssued {
            *sink.borrow_mut() = Some(watched.borrow().pass_count());
        }
    });

    registry.issue_pass(&john, Pass::Permanent);
    assert_eq!(*observed.borrow(), Some(1));
}

/// Notifications identify the employee by id as well as name
#[test]
fn test_notification_fields() {
    let mut registry = AccessRegistry::new();
    let captured = Rc::new(RefCell::new(Vec::<Notification>::new()));
    let sink = Rc::clone(&captured);
    registry.subscribe(move |n| sink.borrow_mut().push(n.clone()));

    let before = Utc::now();
    registry.register_employee(john());
    let after = Utc::now();

    let captured = captured.borrow();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].employee_id, EmployeeId(1));
    assert_eq!(captured[0].employee_name, "John Smith");
    assert!(before <= captured[0].timestamp && captured[0].timestamp <= after);
}

/// The tracing listener can be attached like any other listener
#[test]
fn test_tracing_listener_attaches() {
    let mut registry = AccessRegistry::new();
    registry.subscribe(employee_pass_registry::registry::tracing_listener());
    registry.register_employee(john());
    assert_eq!(registry.notifications().listener_count(), 1);
}
