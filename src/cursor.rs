//! Hover cursor feedback.
//!
//! Pointer moves arrive far faster than cursor styles actually change, so the
//! store only reports a write when the computed style differs from the last
//! one applied to that element. Hosts forward reported changes to whatever
//! visual affordance they own (a CSS class, a terminal cursor glyph).

use std::collections::BTreeMap;

use crate::config::Axis;
use crate::registry::ElementId;
use crate::zone::ResizeEdge;

/// Visual affordance for the element currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Body of a draggable element.
    #[default]
    Grab,
    /// Over a start/end zone of a horizontally-resizing element.
    ResizeHorizontal,
    /// Over a start/end zone of a vertically-resizing element.
    ResizeVertical,
}

impl CursorStyle {
    /// Zone-detector result to hover style for an element on `axis`.
    pub fn for_zone(edge: Option<ResizeEdge>, axis: Axis) -> Self {
        match (edge, axis) {
            (None, _) => Self::Grab,
            (Some(_), Axis::Vertical) => Self::ResizeVertical,
            (Some(_), Axis::Horizontal | Axis::Both) => Self::ResizeHorizontal,
        }
    }

    /// DOM-class-style name, also used in logs.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::ResizeHorizontal => "resize-h",
            Self::ResizeVertical => "resize-v",
        }
    }
}

/// Last style applied per element, deduplicating redundant writes.
#[derive(Debug, Default)]
pub struct CursorFeedback {
    applied: BTreeMap<ElementId, CursorStyle>,
}

impl CursorFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `style` for `element`; returns the style only when it differs
    /// from what is already applied (elements start at [`CursorStyle::Grab`]).
    pub fn apply(&mut self, element: ElementId, style: CursorStyle) -> Option<CursorStyle> {
        let current = self.applied.get(&element).copied().unwrap_or_default();
        if current == style {
            return None;
        }
        self.applied.insert(element, style);
        Some(style)
    }

    /// Drop an unregistered element's record so a later re-registration of
    /// the same id starts from the default again.
    pub fn forget(&mut self, element: ElementId) {
        self.applied.remove(&element);
    }
}
