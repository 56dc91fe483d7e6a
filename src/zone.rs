//! Resize-edge hit zones.
//!
//! Pure geometry: given where a press landed on an element, decide whether it
//! grabbed the element's start edge, its end edge, or the body. The decision
//! is made once at press time and frozen for the whole session.

use crate::config::{Axis, GestureConfig};
use crate::geometry::{BoundsRect, Point};

/// Which end of the element's extent, along its configured axis, a resize
/// affects. `Start` is the left edge for horizontal elements and the top edge
/// for vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Start,
    End,
}

impl ResizeEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Classify a press position against an element's resize zones.
///
/// Returns `None` when the element does not resize or the press landed in
/// the body. A configured `fixed_resize_edge` wins unconditionally, which is
/// how callers build dedicated handle strips that resize no matter where on
/// the strip the press lands. On elements shorter than two zone widths the
/// zones overlap and the start edge wins by evaluation order.
pub fn detect_edge(position: Point, bounds: BoundsRect, config: &GestureConfig) -> Option<ResizeEdge> {
    if !config.enable_resize {
        return None;
    }
    if let Some(edge) = config.fixed_resize_edge {
        return Some(edge);
    }
    let zone = config.resize_zone_width;
    match config.direction {
        Axis::Vertical => {
            let offset = position.y - bounds.y;
            if offset <= zone {
                Some(ResizeEdge::Start)
            } else if bounds.height - offset <= zone {
                Some(ResizeEdge::End)
            } else {
                None
            }
        }
        // `Both` elements resize along their dominant layout axis, which for
        // timeline fragments is horizontal.
        Axis::Horizontal | Axis::Both => {
            let offset = position.x - bounds.x;
            if offset <= zone {
                Some(ResizeEdge::Start)
            } else if bounds.width - offset <= zone {
                Some(ResizeEdge::End)
            } else {
                None
            }
        }
    }
}
