#![forbid(unsafe_code)]

//! Input event vocabulary shared by Scrim crates.
//!
//! The rendering collaborator owns the terminal (or window) and translates
//! raw input into these types before feeding them to a modal binding. Scrim
//! never reads input itself; it only pattern-matches on events it is handed.
//!
//! Key events carry a [`KeyEventKind`] so hold-repeat and release reports
//! from kitty-style keyboard protocols can be distinguished from the initial
//! press; dismiss handling reacts to `Press` only.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state attached to a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

/// A key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character (already case-folded by the modifier state).
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key, 1-based.
    F(u8),
}

/// Whether a key event is the initial press, an auto-repeat, or a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Repeat,
    Release,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain press of `code` with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// A press of `code` with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    /// Whether this is the initial press (not a repeat or release).
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened in a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A single mouse event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
}

impl MouseEvent {
    /// Create a mouse event at the given cell position.
    #[must_use]
    pub const fn new(kind: MouseEventKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }
}

/// An input event delivered by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Viewport resized to (columns, rows).
    Resize(u16, u16),
}

impl Event {
    /// Convenience constructor for a plain key press.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }

    /// The contained key event, if any.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }

    /// The contained mouse event, if any.
    #[must_use]
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_new_is_plain_press() {
        let ev = KeyEvent::new(KeyCode::Escape);
        assert_eq!(ev.code, KeyCode::Escape);
        assert_eq!(ev.modifiers, Modifiers::empty());
        assert_eq!(ev.kind, KeyEventKind::Press);
        assert!(ev.is_press());
    }

    #[test]
    fn key_event_with_modifiers() {
        let ev = KeyEvent::with_modifiers(KeyCode::Char('k'), Modifiers::CTRL);
        assert!(ev.modifiers.contains(Modifiers::CTRL));
        assert!(!ev.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn release_is_not_press() {
        let ev = KeyEvent {
            code: KeyCode::Enter,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Release,
        };
        assert!(!ev.is_press());
    }

    #[test]
    fn event_key_constructor() {
        let ev = Event::key(KeyCode::Enter);
        assert_eq!(ev.as_key().map(|k| k.code), Some(KeyCode::Enter));
        assert!(ev.as_mouse().is_none());
    }

    #[test]
    fn event_mouse_accessor() {
        let ev = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            3,
            7,
        ));
        let mouse = ev.as_mouse().unwrap();
        assert_eq!(mouse.column, 3);
        assert_eq!(mouse.row, 7);
        assert!(ev.as_key().is_none());
    }

    #[test]
    fn resize_has_no_key_or_mouse() {
        let ev = Event::Resize(80, 24);
        assert!(ev.as_key().is_none());
        assert!(ev.as_mouse().is_none());
    }

    #[test]
    fn modifiers_combine() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }
}
