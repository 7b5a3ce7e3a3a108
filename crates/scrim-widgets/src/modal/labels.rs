#![forbid(unsafe_code)]

//! Accessible naming for modal surfaces.
//!
//! Label text is supplied by the host application (already translated if
//! the host localizes); this crate only carries it to whatever renders the
//! modal and announces it to assistive consumers.

/// Accessible labels for one modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLabels {
    /// Announced name of the dialog surface.
    pub dialog: String,
    /// Label of the close control.
    pub close: String,
}

impl Default for ModalLabels {
    fn default() -> Self {
        Self {
            dialog: "Dialog".to_owned(),
            close: "Close".to_owned(),
        }
    }
}

impl ModalLabels {
    /// Set the dialog's announced name.
    pub fn dialog(mut self, label: impl Into<String>) -> Self {
        self.dialog = label.into();
        self
    }

    /// Set the close control's label.
    pub fn close(mut self, label: impl Into<String>) -> Self {
        self.close = label.into();
        self
    }

    /// Modal surfaces always capture interaction while shown, so the
    /// dialog is announced as modal unconditionally.
    #[must_use]
    pub const fn aria_modal(&self) -> bool {
        true
    }
}
