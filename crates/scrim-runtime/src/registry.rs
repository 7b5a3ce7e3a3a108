#![forbid(unsafe_code)]

//! Process-wide registry of named-modal visibility.
//!
//! The [`ModalRegistry`] is the single source of truth for whether a named
//! modal is open. Unrelated parts of an application share one registry
//! (cloning is cheap and shares state) without holding references to each
//! other: a command palette opens `"search"`, and whichever view binding is
//! mounted for `"search"` becomes visible.
//!
//! Entries are created lazily by the first [`ModalRegistry::open`] for a
//! name and are never removed afterwards; closing only flips the flag. Every
//! mutation notifies per-name subscribers synchronously, before the call
//! returns.
//!
//! # Invariants
//!
//! 1. At most one entry exists per name.
//! 2. An entry's flag changes only through `open`/`close`; the per-name
//!    state observable is never handed out, so no other writer can exist.
//! 3. [`ModalRegistry::get`] is side-effect free: it never creates an entry.
//! 4. Repeated identical calls do not re-notify (`open` on an open entry and
//!    `close` on a closed one are no-ops at the notification level).
//! 5. Entries never disappear: once `get(name)` returns `Some`, it returns
//!    `Some` for the rest of the session.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::trace;

use crate::reactive::{Observable, Subscription};

/// One named modal's visibility record.
///
/// # Example
///
/// ```
/// use scrim_runtime::ModalRegistry;
///
/// let registry = ModalRegistry::new();
/// assert!(registry.get("search").is_none());
///
/// registry.open("search");
/// let entry = registry.get("search").unwrap();
/// assert_eq!(entry.name, "search");
/// assert!(entry.is_open);
///
/// registry.close("search");
/// // Closing keeps the entry around with the flag lowered.
/// assert!(!registry.get("search").unwrap().is_open);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalEntry {
    /// Registry key, stable for the application's lifetime.
    pub name: String,
    /// Whether the modal is currently visible.
    pub is_open: bool,
}

/// Shared store mapping modal names to their open/closed state.
///
/// Clones share the same underlying map; tests construct an isolated
/// registry per case instead of reaching for a global.
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    // Slot semantics: `None` = the name was watched (or probed) but never
    // opened, so no entry exists yet; `Some(is_open)` = a live entry.
    // Entries never transition back to `None`.
    slots: Rc<RefCell<AHashMap<String, Observable<Option<bool>>>>>,
}

impl ModalRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure an entry for `name` exists and mark it open.
    ///
    /// Idempotent: opening an already-open modal changes nothing and fires
    /// no notifications.
    pub fn open(&self, name: &str) {
        let slot = self.slot(name);
        trace!(name, "modal open requested");
        slot.set(Some(true));
    }

    /// Mark the entry for `name` closed, if one exists.
    ///
    /// A name that was never opened has no entry; closing it is a no-op and
    /// must not create one.
    pub fn close(&self, name: &str) {
        let slot = self.slots.borrow().get(name).cloned();
        let Some(slot) = slot else { return };
        if slot.get().is_some() {
            trace!(name, "modal close requested");
            slot.set(Some(false));
        }
    }

    /// Read the current entry for `name` without side effects.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ModalEntry> {
        let state = self.slots.borrow().get(name).and_then(|slot| slot.get());
        state.map(|is_open| ModalEntry {
            name: name.to_owned(),
            is_open,
        })
    }

    /// Whether `name` has an open entry. Absent reads as closed.
    #[must_use]
    pub fn is_open(&self, name: &str) -> bool {
        self.slots.borrow().get(name).and_then(|slot| slot.get()) == Some(true)
    }

    /// Observe state changes for one name.
    ///
    /// The callback receives `Some(is_open)` once an entry exists; a name
    /// may be watched before it is ever opened (the callback then first
    /// fires on the creating `open`). Watching does not create an entry.
    /// The subscription is released on drop.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        name: &str,
        callback: impl Fn(Option<bool>) + 'static,
    ) -> Subscription {
        self.slot(name).subscribe(move |state| callback(*state))
    }

    /// Fetch or create the internal slot for `name`.
    ///
    /// Returns a clone so the map borrow is released before any `set` runs;
    /// subscriber callbacks may re-enter the registry.
    fn slot(&self, name: &str) -> Observable<Option<bool>> {
        let mut slots = self.slots.borrow_mut();
        if let Some(slot) = slots.get(name) {
            return slot.clone();
        }
        let slot = Observable::new(None);
        slots.insert(name.to_owned(), slot.clone());
        slot
    }
}
