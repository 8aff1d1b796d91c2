//! Platform queries the combobox needs while handling focus and pointer events
//!
//! These used to be implicit document lookups. Passing them in keeps the
//! engine free of any platform dependency and lets tests fake them.

/// Focus and pointer residency of the widget root
pub trait Environment {
    /// Handle identifying the target of a pointer event
    type Target;

    /// Whether the hosting document (window) currently has focus
    fn document_has_focus(&self) -> bool;

    /// Whether the pointer hovers the widget root or one of its descendants
    fn root_has_pointer(&self) -> bool;

    /// Whether `target` is the widget root or one of its descendants
    fn root_contains(&self, target: &Self::Target) -> bool;
}
