#![forbid(unsafe_code)]

//! Hit-report vocabulary for modal chrome.
//!
//! Layout belongs to the rendering collaborator: it knows where the
//! backdrop, the content surface, and the close control were drawn. After a
//! mouse event it resolves the cell under the cursor to a [`Hit`] and passes
//! that alongside the event. Scrim consumes the report; it never performs
//! geometry itself.
//!
//! Every hit carries a [`HitId`] so a binding can ignore regions registered
//! by a different modal instance on the same screen.

/// Identifier scoping hit regions to one modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(u32);

impl HitId {
    /// Create a hit id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Which part of the modal chrome a mouse event landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The dimmed area outside the content surface.
    Backdrop,
    /// The content surface itself.
    Content,
    /// The explicit close control (button, icon).
    CloseControl,
}

/// A resolved hit: which instance's chrome, and which region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    pub id: HitId,
    pub region: HitRegion,
}

impl Hit {
    /// Create a hit report.
    #[must_use]
    pub const fn new(id: HitId, region: HitRegion) -> Self {
        Self { id, region }
    }
}
