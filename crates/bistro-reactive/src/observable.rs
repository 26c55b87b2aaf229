//! The observable cell and its subscription handle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Entry<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    value: Option<Rc<T>>,
    observers: Vec<Entry<T>>,
    next_id: u64,
    /// True while a dispatch loop is running for this cell.
    dispatching: bool,
    /// Values set from inside observer callbacks, delivered in order after
    /// the running dispatch completes.
    queued: VecDeque<Rc<T>>,
}

impl<T> Inner<T> {
    fn empty() -> Self {
        Self {
            value: None,
            observers: Vec::new(),
            next_id: 0,
            dispatching: false,
            queued: VecDeque::new(),
        }
    }
}

/// A single-threaded observable value cell.
///
/// Cloning an `Observable` produces another handle to the same cell
/// (shared-state semantics, like cloning an `Rc`).
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> Observable<T> {
    /// Create a cell with no value. Subscribers receive nothing until the
    /// first write.
    pub fn unset() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::empty())),
        }
    }

    /// Create a cell holding `value`.
    pub fn new(value: T) -> Self {
        let cell = Self::unset();
        cell.inner.borrow_mut().value = Some(Rc::new(value));
        cell
    }

    /// The current value, or `None` if the cell was never written.
    pub fn current(&self) -> Option<Rc<T>> {
        self.inner.borrow().value.clone()
    }

    /// Run `f` against the current value without cloning the handle.
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let inner = self.inner.borrow();
        f(inner.value.as_deref())
    }

    /// Number of active observers.
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl<T: 'static> Observable<T> {
    /// Store `value` and notify every observer with it.
    ///
    /// The value is freshly allocated here, so this always counts as a
    /// change (see the crate docs on identity-based detection).
    pub fn set(&self, value: T) {
        self.set_shared(Rc::new(value));
    }

    /// Store a shared value. Observers are notified unless `value` is
    /// pointer-identical to the value already stored.
    pub fn set_shared(&self, value: Rc<T>) {
        {
            let mut inner = self.inner.borrow_mut();
            let changed = match &inner.value {
                Some(current) => !Rc::ptr_eq(current, &value),
                None => true,
            };
            if !changed {
                return;
            }
            if inner.dispatching {
                // Re-entrant set from an observer callback: deliver after
                // the running dispatch finishes.
                inner.queued.push_back(value);
                return;
            }
            inner.dispatching = true;
            inner.value = Some(Rc::clone(&value));
        }
        self.dispatch(value);
    }

    /// Register `callback` as an observer. If the cell holds a value, the
    /// callback is invoked with it before this returns.
    ///
    /// The registration lives until the returned [`Subscription`] is
    /// dropped. Removal during a running dispatch takes effect from the
    /// next dispatch; the current snapshot still completes.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push(Entry {
                id,
                callback: Rc::clone(&callback),
            });
            (id, inner.value.clone())
        };
        if let Some(value) = replay {
            callback(&value);
        }

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().observers.retain(|e| e.id != id);
            }
        })
    }

    fn dispatch(&self, first: Rc<T>) {
        let mut value = first;
        loop {
            // Snapshot so callbacks may subscribe, unsubscribe or set
            // without touching a list we are iterating.
            let snapshot: Vec<Callback<T>> = self
                .inner
                .borrow()
                .observers
                .iter()
                .map(|e| Rc::clone(&e.callback))
                .collect();
            tracing::trace!(observers = snapshot.len(), "observable dispatch");
            for callback in snapshot {
                callback(&value);
            }

            let mut inner = self.inner.borrow_mut();
            match inner.queued.pop_front() {
                Some(next) => {
                    inner.value = Some(Rc::clone(&next));
                    drop(inner);
                    value = next;
                }
                None => {
                    inner.dispatching = false;
                    return;
                }
            }
        }
    }
}

/// RAII handle for an observer registration.
///
/// Dropping the subscription removes the observer. Outliving the observable
/// is fine; release then becomes a no-op.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the registration now instead of at drop time.
    pub fn release(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
