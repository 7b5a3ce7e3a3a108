#![forbid(unsafe_code)]

//! Modal view bindings: registry-backed visibility, dismiss gesture
//! classification, and the close protocol.
//!
//! The pieces fit together like this:
//!
//! - [`ModalBinding`] ties a mounted view to a [`ModalRegistry`] entry and
//!   is the only place the close protocol runs
//! - [`ModalConfig`] with [`ModalVariant`] decides which gestures dismiss
//! - [`ModalLabels`] carries the accessible names the host supplies
//!
//! # Example
//!
//! ```
//! use scrim_runtime::{ModalRegistry, Navigator};
//! use scrim_widgets::modal::{ModalBinding, ModalConfig, ModalVariant};
//!
//! let registry = ModalRegistry::new();
//! let navigator = Navigator::new("/");
//!
//! let search = ModalBinding::new("search", &registry)
//!     .with_config(ModalConfig::default().variant(ModalVariant::Overlay))
//!     .auto_close_on(&navigator);
//!
//! registry.open("search");
//! assert!(search.is_visible());
//!
//! navigator.navigate("/settings");
//! assert!(!search.is_visible());
//! ```
//!
//! [`ModalRegistry`]: scrim_runtime::ModalRegistry

mod binding;
mod config;
mod labels;

pub use binding::ModalBinding;
pub use config::{DismissGesture, ModalConfig, ModalVariant};
pub use labels::ModalLabels;
