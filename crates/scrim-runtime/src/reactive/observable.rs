#![forbid(unsafe_code)]

//! Shared, version-tracked values with change notification.
//!
//! [`Observable<T>`] wraps a value in `Rc<RefCell<..>>` for single-threaded
//! shared ownership. Cloning an observable shares the same underlying value;
//! mutating through any clone notifies every subscriber synchronously.
//!
//! Subscribers are stored as `Weak` references and cleaned up lazily during
//! notification; the strong reference lives in the [`Subscription`] returned
//! by [`Observable::subscribe`], so dropping the subscription removes the
//! callback before the next notification cycle.
//!
//! # Invariants
//!
//! 1. The version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. After a `Subscription` is dropped, its callback never fires again.
//! 5. Notification iterates a snapshot: callbacks registered during a cycle
//!    are not invoked until the next one.
//!
//! # Failure Modes
//!
//! - A callback that calls [`Observable::set`] on the same observable
//!   recurses into a nested notification cycle; callbacks later in the outer
//!   cycle still receive the value captured when that cycle started.
//! - Calling `set` from inside [`Observable::with`] panics (the value is
//!   borrowed); use `get` + `set` instead.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

// ---------------------------------------------------------------------------
// Observable<T>
// ---------------------------------------------------------------------------

struct Subscriber<T> {
    callback: Box<dyn Fn(&T)>,
}

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Subscriber<T>>>,
}

/// A shared value that notifies subscribers when it changes.
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
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: 'static> Observable<T> {
    /// Create a new observable holding `value`. The version starts at 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// Do not call `set` on the same observable from within `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of mutations that changed the value since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Register `callback` to run on every value change.
    ///
    /// The callback fires synchronously within `set`, after the value has
    /// been stored. It is released when the returned [`Subscription`] drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong = Rc::new(Subscriber {
            callback: Box::new(callback),
        });
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription { _strong: strong }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Store `value` and notify subscribers.
    ///
    /// Equal values are ignored: no version bump, no notification.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    fn notify(&self) {
        // Snapshot the live callbacks and the value, then release the borrow
        // so callbacks may re-enter (read, subscribe, mutate other
        // observables) without panicking.
        let (value, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks: Vec<Rc<Subscriber<T>>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.value.clone(), callbacks)
        };
        for subscriber in callbacks {
            (subscriber.callback)(&value);
        }
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// RAII guard for an active [`Observable`] subscription.
///
/// Holds the only strong reference to the callback; dropping the guard
/// releases it, and the observable prunes the dead entry lazily on its next
/// notification.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    _strong: Rc<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_then_get() {
        let obs = Observable::new(42);
        assert_eq!(obs.get(), 42);
        assert_eq!(obs.version(), 0);
    }

    #[test]
    fn set_updates_value_and_version() {
        let obs = Observable::new(1);
        obs.set(2);
        assert_eq!(obs.get(), 2);
        assert_eq!(obs.version(), 1);
        obs.set(3);
        assert_eq!(obs.version(), 2);
    }

    #[test]
    fn set_equal_value_is_noop() {
        let obs = Observable::new(5);
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let _sub = obs.subscribe(move |_| f.set(f.get() + 1));

        obs.set(5);
        assert_eq!(obs.version(), 0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn subscriber_receives_new_value() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v| s.set(*v));

        obs.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn subscribers_notified_in_registration_order() {
        let obs = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _s1 = obs.subscribe(move |_| o1.borrow_mut().push(1));
        let o2 = Rc::clone(&order);
        let _s2 = obs.subscribe(move |_| o2.borrow_mut().push(2));
        let o3 = Rc::clone(&order);
        let _s3 = obs.subscribe(move |_| o3.borrow_mut().push(3));

        obs.set(1);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn dropping_subscription_stops_callbacks() {
        let obs = Observable::new(0);
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let sub = obs.subscribe(move |_| f.set(f.get() + 1));

        obs.set(1);
        assert_eq!(fired.get(), 1);

        drop(sub);
        obs.set(2);
        assert_eq!(fired.get(), 1, "callback must not fire after drop");
    }

    #[test]
    fn subscriber_count_tracks_live_subscriptions() {
        let obs = Observable::new(0);
        assert_eq!(obs.subscriber_count(), 0);

        let s1 = obs.subscribe(|_| {});
        let s2 = obs.subscribe(|_| {});
        assert_eq!(obs.subscriber_count(), 2);

        drop(s1);
        assert_eq!(obs.subscriber_count(), 1);
        drop(s2);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn clone_shares_state() {
        let a = Observable::new(String::from("x"));
        let b = a.clone();

        b.set(String::from("y"));
        assert_eq!(a.get(), "y");
        assert_eq!(a.version(), 1);
        assert_eq!(b.version(), 1);
    }

    #[test]
    fn with_reads_without_cloning() {
        let obs = Observable::new(String::from("hello"));
        let len = obs.with(String::len);
        assert_eq!(len, 5);
    }

    #[test]
    fn callback_may_read_same_observable() {
        let obs = Observable::new(1);
        let seen = Rc::new(Cell::new(0));

        let inner = obs.clone();
        let s = Rc::clone(&seen);
        let _sub = obs.subscribe(move |_| s.set(inner.get()));

        obs.set(9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn subscription_added_during_notification_waits_for_next_cycle() {
        let obs = Observable::new(0);
        let late_fired = Rc::new(Cell::new(0));
        let late_subs = Rc::new(RefCell::new(Vec::new()));

        let src = obs.clone();
        let fired = Rc::clone(&late_fired);
        let holder = Rc::clone(&late_subs);
        let _sub = obs.subscribe(move |_| {
            let f = Rc::clone(&fired);
            holder
                .borrow_mut()
                .push(src.subscribe(move |_| f.set(f.get() + 1)));
        });

        obs.set(1);
        assert_eq!(late_fired.get(), 0, "new subscriber must not fire in the same cycle");

        obs.set(2);
        assert_eq!(late_fired.get(), 1);
    }

    #[test]
    fn callback_may_mutate_other_observable() {
        let source = Observable::new(0);
        let mirror = Observable::new(0);

        let m = mirror.clone();
        let _sub = source.subscribe(move |v| m.set(*v));

        source.set(4);
        assert_eq!(mirror.get(), 4);
        assert_eq!(mirror.version(), 1);
    }

    #[test]
    fn versions_are_per_observable() {
        let a = Observable::new(0);
        let b = Observable::new(0);
        a.set(1);
        a.set(2);
        b.set(1);
        assert_eq!(a.version(), 2);
        assert_eq!(b.version(), 1);
    }
}
