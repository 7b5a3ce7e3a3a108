#![forbid(unsafe_code)]

//! Reactive primitives for Scrim.
//!
//! Change tracking is deliberately small and strictly one-directional:
//!
//! - [`Observable`]: a shared, version-tracked value with synchronous
//!   subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Binding`]: pull-based read handle with an optional transform.
//! - [`BindingScope`]: holds subscriptions for one owner and releases them
//!   together.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Subscribers are stored as `Weak` callbacks and cleaned up
//! lazily during notification; the strong reference lives in the
//! `Subscription`. There is no batching and no derived-value memoization:
//! every mutation notifies synchronously before `set` returns, which is what
//! keeps a modal's view flag equal to its registry entry with no window for
//! a stale read.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 5. Notification iterates a snapshot; callbacks registered during a cycle
//!    first fire in the next one.

pub mod binding;
pub mod observable;

pub use binding::{Binding, BindingScope, bind_mapped, bind_observable};
pub use observable::{Observable, Subscription};
