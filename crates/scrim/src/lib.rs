#![forbid(unsafe_code)]

//! Scrim: shared modal state for terminal applications.
//!
//! Scrim keeps named-modal visibility in one process-wide
//! [`ModalRegistry`] so that unrelated components can open, close, and
//! observe modals without referencing each other. View-side,
//! [`ModalBinding`] mirrors an entry into a mounted view, classifies
//! dismiss gestures, and runs the close protocol; [`Navigator`] dismisses
//! bound modals on route changes.
//!
//! # Example
//!
//! ```
//! use scrim::prelude::*;
//!
//! let registry = ModalRegistry::new();
//! let navigator = Navigator::new("/");
//!
//! let palette = ModalBinding::new("search", &registry)
//!     .with_config(ModalConfig::default().variant(ModalVariant::Overlay))
//!     .auto_close_on(&navigator);
//!
//! // Any component can open the modal by name.
//! registry.open("search");
//! assert!(palette.is_visible());
//!
//! // Escape runs the close protocol; the entry stays, closed.
//! palette.handle_event(&Event::key(KeyCode::Escape), None);
//! assert!(!registry.is_open("search"));
//! ```
//!
//! [`ModalRegistry`]: scrim_runtime::ModalRegistry
//! [`ModalBinding`]: scrim_widgets::ModalBinding
//! [`Navigator`]: scrim_runtime::Navigator

pub use scrim_core::event;
pub use scrim_core::hit;
pub use scrim_runtime::reactive;
pub use scrim_runtime::{ModalEntry, ModalRegistry, Navigator};

#[cfg(feature = "widgets")]
pub use scrim_widgets::modal;
#[cfg(feature = "widgets")]
pub use scrim_widgets::{DismissGesture, ModalBinding, ModalConfig, ModalLabels, ModalVariant};

/// Single-import surface for applications.
pub mod prelude {
    pub use scrim_core::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    pub use scrim_core::hit::{Hit, HitId, HitRegion};
    pub use scrim_runtime::reactive::{Binding, BindingScope, Observable, Subscription};
    pub use scrim_runtime::{ModalEntry, ModalRegistry, Navigator};

    #[cfg(feature = "widgets")]
    pub use scrim_widgets::modal::{
        DismissGesture, ModalBinding, ModalConfig, ModalLabels, ModalVariant,
    };
}
