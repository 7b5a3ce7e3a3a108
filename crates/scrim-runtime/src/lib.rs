#![forbid(unsafe_code)]

//! Runtime state layer for Scrim: the modal registry, the navigation
//! signal, and the reactive substrate both are built on.
//!
//! This crate provides:
//! - [`ModalRegistry`] as the shared source of truth for named-modal
//!   visibility, with lazily created, never-removed entries
//! - [`Navigator`] as an observable route that bindings auto-close on
//! - [`reactive`] with [`Observable`], [`Subscription`] and one-way
//!   [`Binding`] primitives for single-threaded synchronous UI state
//!
//! Everything here is `Rc`-based and single-threaded. Mutations notify
//! subscribers before the mutating call returns, so a read that follows a
//! write always sees the written state.

pub mod navigator;
pub mod reactive;
pub mod registry;

pub use navigator::Navigator;
pub use reactive::{Binding, BindingScope, Observable, Subscription};
pub use registry::{ModalEntry, ModalRegistry};
