//! Tests for registry membership and query behavior

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use employee_pass_registry::*;
use std::cell::RefCell;
use std::rc::Rc;

fn at(m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, m, d, h, 0, 0).unwrap()
}

fn employee(id: i64, first: &str, last: &str) -> EmployeeHandle {
    EmployeeHandle::new(Employee::new(id, last, first, "Staff", first.to_lowercase(), "pw"))
}

fn ids(handles: &[EmployeeHandle]) -> Vec<i64> {
    handles.iter().map(|h| h.id().value()).collect()
}

/// The worked example: John Smith with a temporary pass for 1-15 May 2022
#[test]
fn test_john_smith_scenario() {
    let mut registry = AccessRegistry::new();
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);
    registry.subscribe(move |n| sink.borrow_mut().push(n.kind));

    let john = EmployeeHandle::new(Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345"));
    registry.register_employee(john.clone());

    let pass = Pass::temporary(at(5, 1, 0), at(5, 15, 0));
    registry.issue_pass(&john, pass);

    assert!(registry.check_access_at(&john, &pass, at(5, 10, 12)));
    assert!(!registry.check_access_at(&john, &pass, at(6, 1, 0)));

    assert_eq!(
        *messages.borrow(),
        vec![
            NotificationKind::Registered,
            NotificationKind::PassIssued,
            NotificationKind::AccessGranted,
            NotificationKind::AccessDenied,
        ]
    );

    assert!(registry.employees_with_permanent_pass().is_empty());

    let on_15 = registry
        .employees_with_temporary_pass_expiring_on_date(NaiveDate::from_ymd_opt(2022, 5, 15).unwrap());
    assert_eq!(ids(&on_15), vec![1]);

    let on_16 = registry
        .employees_with_temporary_pass_expiring_on_date(NaiveDate::from_ymd_opt(2022, 5, 16).unwrap());
    assert!(on_16.is_empty());
}

/// Listing after N registrations returns N entries in call order
#[test]
fn test_list_employees_preserves_order() {
    let mut registry = AccessRegistry::new();
    let order = [5, 3, 9, 1, 7];
    for id in order {
        registry.register_employee(employee(id, "E", &format!("N{}", id)));
    }

    let listed: Vec<i64> = registry.list_employees().map(|h| h.id().value()).collect();
    assert_eq!(listed, order.to_vec());
}

/// Permanent holders are exactly the employees with at least one permanent pass
#[test]
fn test_permanent_pass_filter() {
    let mut registry = AccessRegistry::new();
    let handles: Vec<EmployeeHandle> =
        (1..=6).map(|id| employee(id, "E", &format!("N{}", id))).collect();
    for handle in &handles {
        registry.register_employee(handle.clone());
    }

    registry.issue_pass(&handles[1], Pass::Permanent);
    registry.issue_pass(&handles[3], Pass::temporary(at(5, 1, 0), at(5, 2, 0)));
    registry.issue_pass(&handles[4], Pass::temporary(at(5, 1, 0), at(5, 2, 0)));
    registry.issue_pass(&handles[4], Pass::Permanent);
    registry.issue_pass(&handles[5], Pass::Permanent);
    registry.issue_pass(&handles[5], Pass::Permanent);

    assert_eq!(ids(&registry.employees_with_permanent_pass()), vec![2, 5, 6]);
}

/// Expiry matching compares calendar dates on both sides
#[test]
fn test_expiring_on_compares_dates_only() {
    let mut registry = AccessRegistry::new();
    let early = employee(1, "Early", "Bird");
    let late = employee(2, "Night", "Owl");
    let other = employee(3, "Other", "Day");
    let permanent = employee(4, "Always", "Here");
    for handle in [&early, &late, &other, &permanent] {
        registry.register_employee(handle.clone());
    }

    registry.issue_pass(&early, Pass::temporary(at(5, 1, 0), at(5, 15, 0)));
    registry.issue_pass(&late, Pass::temporary(at(5, 1, 0), at(5, 15, 23)));
    registry.issue_pass(&other, Pass::temporary(at(5, 1, 0), at(5, 14, 23)));
    registry.issue_pass(&permanent, Pass::Permanent);

    for hour in [0, 12, 23] {
        let result = registry.employees_with_temporary_pass_expiring_on(at(5, 15, hour));
        assert_eq!(ids(&result), vec![1, 2], "query hour {}", hour);
    }
}

/// An employee with several temporary passes matches if any one expires on the date
#[test]
fn test_any_temporary_pass_matches() {
    let mut registry = AccessRegistry::new();
    let john = employee(1, "John", "Smith");
    registry.register_employee(john.clone());
    registry.issue_pass(&john, Pass::temporary(at(4, 1, 0), at(4, 30, 0)));
    registry.issue_pass(&john, Pass::temporary(at(5, 1, 0), at(5, 15, 0)));

    assert_eq!(registry.employees_with_temporary_pass_expiring_on(at(4, 30, 9)).len(), 1);
    assert_eq!(registry.employees_with_temporary_pass_expiring_on(at(5, 15, 9)).len(), 1);
    assert!(registry.employees_with_temporary_pass_expiring_on(at(5, 1, 9)).is_empty());
}

/// Issuing to an unregistered employee never changes membership
#[test]
fn test_issue_does_not_register() {
    let mut registry = AccessRegistry::new();
    registry.register_employee(employee(1, "John", "Smith"));
    let outsider = employee(2, "Out", "Sider");

    registry.issue_pass(&outsider, Pass::Permanent);
    registry.issue_pass(&outsider, Pass::temporary(at(5, 1, 0), at(5, 15, 0)));

    assert_eq!(registry.employee_count(), 1);
    assert!(!registry.contains(&outsider));
    assert!(registry.employees_with_permanent_pass().is_empty());
    assert!(registry.employees_with_temporary_pass_expiring_on(at(5, 15, 0)).is_empty());
    assert_eq!(outsider.borrow().pass_count(), 2);
}

/// A same-id copy is a different employee object
#[test]
fn test_membership_is_by_object_not_id() {
    let mut registry = AccessRegistry::new();
    let registered = employee(1, "John", "Smith");
    registry.register_employee(registered.clone());

    let copy = EmployeeHandle::new(registered.snapshot());
    registry.issue_pass(&copy, Pass::Permanent);

    assert!(registry.employees_with_permanent_pass().is_empty());
    assert_eq!(registry.find_employee(EmployeeId(1)).map(|h| h.borrow().pass_count()), Some(0));
}

/// Query results are materialized and can be iterated repeatedly
#[test]
fn test_query_results_are_reiterable() {
    let mut registry = AccessRegistry::new();
    let john = employee(1, "John", "Smith");
    registry.register_employee(john.clone());
    registry.issue_pass(&john, Pass::Permanent);

    let holders = registry.employees_with_permanent_pass();
    let first_pass: Vec<i64> = holders.iter().map(|h| h.id().value()).collect();
    let second_pass: Vec<i64> = holders.iter().map(|h| h.id().value()).collect();
    assert_eq!(first_pass, second_pass);
}

/// Empty registry queries return empty results, not errors
#[test]
fn test_empty_registry() {
    let registry = AccessRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.list_employees().count(), 0);
    assert!(registry.employees_with_permanent_pass().is_empty());
    assert!(registry.employees_with_temporary_pass_expiring_today().is_empty());
    assert!(registry.find_employee(EmployeeId(1)).is_none());
}
