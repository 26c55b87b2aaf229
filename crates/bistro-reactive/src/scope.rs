//! Subscription lifetimes tied to a logical scope.

use std::fmt;

use crate::observable::{Observable, Subscription};

/// Collects subscriptions for a logical lifetime (a screen, a component, a
/// test). When the scope is dropped, every held registration is released,
/// so no callback bound to it fires afterwards.
///
/// This is the mechanism by which observables avoid retaining observers
/// past their declared lifetime: a view owns its scope, the scope owns the
/// subscriptions, and tearing down the view drops both.
pub struct ObserverScope {
    subscriptions: Vec<Subscription>,
}

impl ObserverScope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Take ownership of an externally created subscription.
    pub fn hold(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Subscribe to `source` for the remainder of this scope's lifetime.
    pub fn subscribe<T: 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let subscription = source.subscribe(callback);
        self.subscriptions.push(subscription);
        self
    }

    /// Number of active registrations held by this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all registrations now; the scope stays usable.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl Default for ObserverScope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverScope")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn scope_subscription_receives_updates() {
        let cell: Observable<i32> = Observable::unset();
        let seen = Rc::new(Cell::new(0));

        let mut scope = ObserverScope::new();
        let s = Rc::clone(&seen);
        scope.subscribe(&cell, move |v| s.set(*v));
        assert_eq!(scope.len(), 1);

        cell.set(4);
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn dropping_scope_releases_registrations() {
        let cell: Observable<i32> = Observable::unset();
        let seen = Rc::new(Cell::new(0));

        {
            let mut scope = ObserverScope::new();
            let s = Rc::clone(&seen);
            scope.subscribe(&cell, move |v| s.set(*v));
            cell.set(1);
            assert_eq!(seen.get(), 1);
        }

        cell.set(2);
        assert_eq!(seen.get(), 1);
        assert_eq!(cell.observer_count(), 0);
    }

    #[test]
    fn clear_releases_but_scope_stays_usable() {
        let cell: Observable<i32> = Observable::unset();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let mut scope = ObserverScope::new();
        let f = Rc::clone(&first);
        scope.subscribe(&cell, move |v| f.set(*v));
        scope.clear();
        assert!(scope.is_empty());

        let s = Rc::clone(&second);
        scope.subscribe(&cell, move |v| s.set(*v));

        cell.set(5);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 5);
    }

    #[test]
    fn hold_adopts_external_subscription() {
        let cell: Observable<i32> = Observable::unset();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);

        let mut scope = ObserverScope::new();
        scope.hold(cell.subscribe(move |v| s.set(*v)));

        cell.set(8);
        assert_eq!(seen.get(), 8);

        drop(scope);
        cell.set(9);
        assert_eq!(seen.get(), 8);
    }

    #[test]
    fn scope_can_span_multiple_cells() {
        let a: Observable<i32> = Observable::unset();
        let b: Observable<i32> = Observable::unset();
        let total = Rc::new(Cell::new(0));

        let mut scope = ObserverScope::new();
        let t = Rc::clone(&total);
        scope.subscribe(&a, move |v| t.set(t.get() + v));
        let t = Rc::clone(&total);
        scope.subscribe(&b, move |v| t.set(t.get() + v));
        assert_eq!(scope.len(), 2);

        a.set(1);
        b.set(2);
        assert_eq!(total.get(), 3);
    }
}
