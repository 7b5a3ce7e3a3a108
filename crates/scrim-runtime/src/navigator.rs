#![forbid(unsafe_code)]

//! Route change signal.
//!
//! [`Navigator`] carries the application's current route and lets modal
//! bindings react to navigation, typically by dismissing themselves. It is
//! deliberately small: no history stack, no parameter parsing, just an
//! observable route string. Hosts with a real router forward their route
//! changes into [`Navigator::navigate`].
//!
//! Subscribers fire only when the route actually changes; navigating to the
//! route already shown is a no-op.

use tracing::trace;

use crate::reactive::{Observable, Subscription};

/// Shared handle on the current route.
///
/// Clones observe and mutate the same route, mirroring how registry clones
/// share entries.
#[derive(Debug, Clone)]
pub struct Navigator {
    route: Observable<String>,
}

impl Navigator {
    /// Create a navigator positioned at `route`.
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: Observable::new(route.into()),
        }
    }

    /// The route currently shown.
    #[must_use]
    pub fn current(&self) -> String {
        self.route.get()
    }

    /// Move to `route`, notifying subscribers if it differs from the
    /// current one.
    pub fn navigate(&self, route: impl Into<String>) {
        let route = route.into();
        trace!(%route, "navigating");
        self.route.set(route);
    }

    /// Observe route changes. The subscription is released on drop.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&String) + 'static) -> Subscription {
        self.route.subscribe(callback)
    }

    /// Monotonic change counter for the route, for polling consumers.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.route.version()
    }
}

impl Default for Navigator {
    /// A navigator starting at the root route, `"/"`.
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn navigate_updates_current_route() {
        let navigator = Navigator::new("/");
        navigator.navigate("/settings");
        assert_eq!(navigator.current(), "/settings");
    }

    #[test]
    fn navigate_notifies_subscribers_synchronously() {
        let navigator = Navigator::new("/");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = Rc::clone(&seen);
        let _sub = navigator.subscribe(move |route| s.borrow_mut().push(route.clone()));

        navigator.navigate("/a");
        navigator.navigate("/b");
        assert_eq!(*seen.borrow(), vec!["/a".to_owned(), "/b".to_owned()]);
    }

    #[test]
    fn navigating_to_current_route_is_silent() {
        let navigator = Navigator::new("/home");
        let fired = Rc::new(Cell::new(0));

        let f = Rc::clone(&fired);
        let _sub = navigator.subscribe(move |_| f.set(f.get() + 1));

        navigator.navigate("/home");
        assert_eq!(fired.get(), 0);
        assert_eq!(navigator.version(), 0);
    }

    #[test]
    fn dropped_subscription_goes_quiet() {
        let navigator = Navigator::new("/");
        let fired = Rc::new(Cell::new(0));

        let f = Rc::clone(&fired);
        let sub = navigator.subscribe(move |_| f.set(f.get() + 1));

        navigator.navigate("/a");
        drop(sub);
        navigator.navigate("/b");
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn clones_share_the_route() {
        let navigator = Navigator::new("/");
        let handle = navigator.clone();

        handle.navigate("/shared");
        assert_eq!(navigator.current(), "/shared");
        assert_eq!(navigator.version(), 1);
    }
}
