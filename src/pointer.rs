//! Raw pointer input vocabulary.
//!
//! Hosts translate their platform events (browser pointer events, terminal
//! mouse reports, synthetic test streams) into [`PointerEvent`]s and feed
//! them to [`crate::engine::GestureEngine::handle_pointer_event`]. The engine
//! never talks to a platform directly.

use std::time::Instant;

use crate::geometry::Point;

/// Mouse button, mirroring the usual three-button vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Identifier of one touch contact, stable for the contact's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TouchId(pub u32);

/// What happened, without the where/when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Mouse button pressed. Only [`PointerButton::Left`] starts a session.
    Down(PointerButton),
    /// Mouse button released.
    Up(PointerButton),
    /// Mouse moved, buttons in whatever state they are in.
    Moved,
    TouchStart(TouchId),
    TouchMoved(TouchId),
    TouchEnd(TouchId),
    /// The platform took the touch away (incoming call, gesture handoff).
    TouchCancelled(TouchId),
}

/// One timestamped input event in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, at: Instant) -> Self {
        Self { kind, position, at }
    }
}

/// Which device class a live session was latched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOrigin {
    Mouse,
    Touch(TouchId),
}

impl PointerOrigin {
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch(_))
    }
}
