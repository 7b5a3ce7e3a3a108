#![forbid(unsafe_code)]

//! Dismiss behavior configuration and gesture classification.
//!
//! [`ModalConfig`] describes how a mounted modal may be dismissed and
//! classifies raw input into a [`DismissGesture`]. Classification is pure:
//! it never touches the registry, so it can be unit tested without any
//! shared state and the binding stays the single place that runs the close
//! protocol.

use scrim_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use scrim_core::hit::{Hit, HitId, HitRegion};

/// Presentation style of a modal, which doubles as its dismiss policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    /// Full-viewport surface (command palettes, search). The whole content
    /// area is a dismiss target, as is the Enter key.
    Overlay,
    /// Standard card with chrome. Content clicks and Enter do nothing;
    /// dismissal goes through the close control, the backdrop, or Escape.
    #[default]
    Card,
}

/// Which dismiss affordance the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissGesture {
    /// Click on the tinted area outside the content.
    Backdrop,
    /// Click on the close control.
    CloseControl,
    /// Click inside the content area (overlay variant only).
    Content,
    /// Escape key.
    Escape,
    /// Enter key (overlay variant only).
    Enter,
}

/// Dismiss configuration for one mounted modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    pub variant: ModalVariant,
    pub close_on_backdrop: bool,
    pub close_on_escape: bool,
    pub hit_id: Option<HitId>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            variant: ModalVariant::default(),
            close_on_backdrop: true,
            close_on_escape: true,
            hit_id: None,
        }
    }
}

impl ModalConfig {
    /// Set the presentation variant.
    pub fn variant(mut self, variant: ModalVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set close-on-backdrop behavior.
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    /// Set close-on-escape behavior.
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set the hit id this modal's regions were registered under.
    ///
    /// Without a hit id, mouse gestures cannot be attributed to this modal
    /// and are ignored.
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Classify an input event as a dismiss gesture, if it is one.
    ///
    /// `hit` is the hit-test result for mouse events, usually resolved
    /// against the last rendered frame. Key events ignore `hit`.
    #[must_use]
    pub fn dismiss_gesture(&self, event: &Event, hit: Option<Hit>) -> Option<DismissGesture> {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) if self.close_on_escape => Some(DismissGesture::Escape),
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) if self.variant == ModalVariant::Overlay => Some(DismissGesture::Enter),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                if let (Some(hit), Some(expected)) = (hit, self.hit_id)
                    && hit.id == expected
                {
                    return match hit.region {
                        HitRegion::Backdrop if self.close_on_backdrop => {
                            Some(DismissGesture::Backdrop)
                        }
                        HitRegion::CloseControl => Some(DismissGesture::CloseControl),
                        HitRegion::Content if self.variant == ModalVariant::Overlay => {
                            Some(DismissGesture::Content)
                        }
                        _ => None,
                    };
                }
                None
            }
            _ => None,
        }
    }
}
