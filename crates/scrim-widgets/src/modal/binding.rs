#![forbid(unsafe_code)]

//! View binding between one mounted modal and the registry.
//!
//! A [`ModalBinding`] is created when a modal view mounts and dropped when
//! it unmounts. It mirrors the registry entry for its name into a local
//! visible flag, classifies dismiss gestures through its [`ModalConfig`],
//! and runs the close protocol for every dismiss path.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use scrim_core::event::Event;
use scrim_core::hit::Hit;
use scrim_runtime::reactive::{Binding, BindingScope, Observable, bind_observable};
use scrim_runtime::{ModalRegistry, Navigator};

use super::config::{DismissGesture, ModalConfig};
use super::labels::ModalLabels;

/// State shared between the binding and the closures it registers.
struct BindingInner {
    name: String,
    registry: ModalRegistry,
    visible: Observable<bool>,
    on_closed: RefCell<Rc<dyn Fn()>>,
}

impl BindingInner {
    /// The close protocol, in its fixed order: notify the host that the
    /// modal closed, then lower the registry flag. The two halves always
    /// run together, so `on_closed` observes the registry still open.
    fn run_close_protocol(&self) {
        let callback = Rc::clone(&self.on_closed.borrow());
        callback();
        self.registry.close(&self.name);
    }
}

/// Keeps one mounted modal view in step with the [`ModalRegistry`].
///
/// Construction copies the current registry state for the bound name (a
/// missing entry reads as closed, and none is created) and subscribes for
/// changes. State flows one way, registry to view: the visible flag is
/// written only from registry notifications, never directly.
///
/// Invariants:
/// - Once an entry exists for the name, `is_visible()` equals its flag;
///   with no entry the binding reads hidden.
/// - Every dismiss path runs the same close protocol: gestures through
///   [`ModalBinding::handle_event`], explicit [`ModalBinding::close`]
///   calls, and navigation auto-close.
/// - Navigation auto-close runs the protocol whenever an entry exists for
///   the name, open or closed; with no entry it does nothing at all.
///
/// Dropping the binding releases its registry and navigator subscriptions.
/// The registry entry and its state outlive the view.
pub struct ModalBinding {
    inner: Rc<BindingInner>,
    config: ModalConfig,
    labels: ModalLabels,
    scope: BindingScope,
}

impl ModalBinding {
    /// Bind `name` against `registry`, starting from whatever state the
    /// registry currently holds for it.
    pub fn new(name: impl Into<String>, registry: &ModalRegistry) -> Self {
        let name = name.into();
        let visible = Observable::new(registry.is_open(&name));

        let inner = Rc::new(BindingInner {
            name: name.clone(),
            registry: registry.clone(),
            visible: visible.clone(),
            on_closed: RefCell::new(Rc::new(|| {})),
        });

        let mut scope = BindingScope::new();
        scope.hold(registry.subscribe(&name, move |state| {
            // Only a defined registry state overwrites the local flag.
            if let Some(open) = state {
                visible.set(open);
            }
        }));

        Self {
            inner,
            config: ModalConfig::default(),
            labels: ModalLabels::default(),
            scope,
        }
    }

    /// Replace the dismiss configuration.
    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the accessible labels.
    pub fn with_labels(mut self, labels: ModalLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the host callback fired as the first half of the close
    /// protocol. Without one, dismissal still closes the registry entry.
    pub fn on_closed(self, callback: impl Fn() + 'static) -> Self {
        *self.inner.on_closed.borrow_mut() = Rc::new(callback);
        self
    }

    /// Dismiss this modal whenever `navigator` changes route.
    ///
    /// The protocol runs on every route change for which an entry exists
    /// for the bound name, even an already-closed one; a name that was
    /// never opened stays untouched.
    pub fn auto_close_on(mut self, navigator: &Navigator) -> Self {
        let inner = Rc::clone(&self.inner);
        self.scope.hold(navigator.subscribe(move |_route| {
            if inner.registry.get(&inner.name).is_some() {
                inner.run_close_protocol();
            }
        }));
        self
    }

    /// The bound registry name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The dismiss configuration in effect.
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// The accessible labels in effect.
    pub fn labels(&self) -> &ModalLabels {
        &self.labels
    }

    /// Open this modal through the registry.
    pub fn open(&self) {
        self.inner.registry.open(&self.inner.name);
    }

    /// Run the close protocol: notify the host, then close the entry.
    pub fn close(&self) {
        self.inner.run_close_protocol();
    }

    /// Whether the bound modal is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// A pull-based view of the visible flag, for render paths.
    #[must_use]
    pub fn visibility(&self) -> Binding<bool> {
        bind_observable(&self.inner.visible)
    }

    /// Feed an input event through gesture classification and, on a
    /// dismiss gesture, run the close protocol.
    ///
    /// Returns the classified gesture, or `None` when the event is not a
    /// dismiss or the modal is not shown. A hidden binding is inert.
    pub fn handle_event(&self, event: &Event, hit: Option<Hit>) -> Option<DismissGesture> {
        if !self.is_visible() {
            return None;
        }
        let gesture = self.config.dismiss_gesture(event, hit)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "modal_dismiss",
            name = %self.inner.name,
            gesture = ?gesture
        )
        .entered();

        self.close();
        Some(gesture)
    }

    /// Number of live subscriptions this binding holds.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.scope.subscription_count()
    }
}

impl fmt::Debug for ModalBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalBinding")
            .field("name", &self.inner.name)
            .field("visible", &self.inner.visible.get())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
