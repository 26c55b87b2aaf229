//! Single-threaded reactive cells for the bistro core.
//!
//! This crate provides the change-notification primitive that the store,
//! the statistics aggregator and the view binders are built on:
//!
//! - [`Observable`]: a value cell that notifies registered observers when a
//!   new value is stored. A cell starts *unset*; subscribers registered
//!   before the first write receive nothing until it happens.
//! - [`Subscription`]: RAII guard that removes the registration on drop.
//! - [`ObserverScope`]: collects subscriptions for a logical lifetime (a
//!   screen, a test) and releases them together.
//!
//! # Change detection
//!
//! `Observable<T>` stores its value behind an `Rc<T>` and uses **pointer
//! identity**, not `PartialEq`, as the change predicate. Publishing a
//! freshly allocated value always notifies, even when it compares equal to
//! the previous one. Producers that want downstream refresh therefore emit a
//! new allocation per change; producers that want to suppress notification
//! re-set the `Rc` they already hold.
//!
//! # Invariants
//!
//! 1. Notification is synchronous: `set` returns only after every observer
//!    has processed the new value.
//! 2. Observers are notified in subscription order.
//! 3. A `set` issued from inside an observer callback is queued and
//!    delivered after the current dispatch completes, so emissions of one
//!    cell are totally ordered and the observer list is never mutated under
//!    a running dispatch.
//! 4. Subscribing to a cell that holds a value immediately replays that
//!    value to the new observer.
//! 5. Dropping a [`Subscription`] (or its [`ObserverScope`]) releases the
//!    callback; it will not fire in any later dispatch.

pub mod observable;
pub mod scope;

pub use observable::{Observable, Subscription};
pub use scope::ObserverScope;
