#![forbid(unsafe_code)]

//! Shared input vocabulary for Scrim.
//!
//! This crate defines the event and hit-report types the rest of the
//! workspace consumes:
//!
//! - [`event`]: keyboard/mouse/resize events as delivered by the rendering
//!   collaborator.
//! - [`hit`]: which part of a modal's chrome a mouse event landed in.
//!
//! It deliberately contains no geometry, styling, or terminal I/O; those
//! concerns live in the embedding toolkit.

pub mod event;
pub mod hit;

pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use hit::{Hit, HitId, HitRegion};
