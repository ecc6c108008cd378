//! Synchronous notification broadcast
//!
//! Listeners are invoked in subscription order, inline with the call that
//! produced the notification. With no listeners a notification is dropped.

use std::fmt;
use tracing::trace;

use crate::events::Notification;
use crate::types::ListenerId;

type Listener = Box<dyn Fn(&Notification)>;

/// Broadcast channel for registry notifications
#[derive(Default)]
pub struct NotificationBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl NotificationBus {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener and return its handle
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Notification) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver a notification to every listener
    pub fn publish(&self, notification: &Notification) {
        if self.listeners.is_empty() {
            trace!(kind = %notification.kind, "No listeners, notification dropped");
            return;
        }
        for (_, listener) in &self.listeners {
            listener(notification);
        }
    }

    /// Number of subscribed listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether any listener is subscribed
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Employee;
    use crate::events::NotificationKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn notification() -> Notification {
        let employee = Employee::new(1, "Smith", "John", "Manager", "jsmith", "12345");
        Notification::new(NotificationKind::Registered, &employee)
    }

    #[test]
    fn test_publish_without_listeners_is_silent() {
        let bus = NotificationBus::new();
        bus.publish(&notification());
        assert!(!bus.has_listeners());
    }

    #[test]
    fn test_all_listeners_receive_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |n| first.borrow_mut().push(format!("a:{}", n.kind)));
        let second = Rc::clone(&log);
        bus.subscribe(move |n| second.borrow_mut().push(format!("b:{}", n.kind)));

        bus.publish(&notification());
        assert_eq!(*log.borrow(), vec!["a:registered", "b:registered"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = NotificationBus::new();

        let counter = Rc::clone(&count);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(bus.listener_count(), 1);

        bus.publish(&notification());
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&notification());

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_listener_ids_are_unique() {
        let mut bus = NotificationBus::new();
        let a = bus.subscribe(|_| {});
        let b = bus.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
