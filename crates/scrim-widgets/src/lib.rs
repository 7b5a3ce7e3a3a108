#![forbid(unsafe_code)]

//! Modal view layer for Scrim.
//!
//! This crate provides:
//! - [`ModalBinding`] for keeping a mounted modal view in step with the
//!   shared [`scrim_runtime::ModalRegistry`]
//! - [`ModalConfig`] and [`ModalVariant`] for dismiss gesture policy
//! - [`ModalLabels`] for accessible naming
//!
//! Rendering is left to the host: bindings expose visibility and labels,
//! consume classified input, and never draw anything themselves.

pub mod modal;

pub use modal::{DismissGesture, ModalBinding, ModalConfig, ModalLabels, ModalVariant};
