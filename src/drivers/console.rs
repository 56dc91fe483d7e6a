//! Terminal-backed pointer driver.
//!
//! Translates crossterm mouse reports into [`PointerEvent`]s, one terminal
//! cell per pixel. Terminals have no touch vocabulary, so this driver only
//! ever produces mouse-side events; touch streams come from other hosts.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::{execute, terminal};
use thiserror::Error;

use super::PointerDriver;
use crate::geometry::Point;
use crate::pointer::{PointerButton, PointerEvent, PointerEventKind};

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("terminal backend rejected mouse capture: {0}")]
    Backend(#[from] io::Error),
    #[error("raw mode must be enabled before mouse capture")]
    RawModeRequired,
}

/// Map one crossterm mouse report to the engine vocabulary. Scroll wheels
/// have no gesture meaning and translate to nothing.
pub fn translate_mouse_event(mouse: &MouseEvent, at: Instant) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(button) => PointerEventKind::Down(translate_button(button)),
        MouseEventKind::Up(button) => PointerEventKind::Up(translate_button(button)),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerEventKind::Moved,
        MouseEventKind::ScrollDown
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return None,
    };
    let position = Point::new(f64::from(mouse.column), f64::from(mouse.row));
    Some(PointerEvent::new(kind, position, at))
}

fn translate_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

pub struct ConsolePointerDriver {
    pending_key: Option<KeyEvent>,
    capture_enabled: bool,
}

impl Default for ConsolePointerDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePointerDriver {
    pub fn new() -> Self {
        Self {
            pending_key: None,
            capture_enabled: false,
        }
    }

    /// Start receiving mouse reports. The host must have raw mode on first,
    /// otherwise the terminal echoes escape sequences into the session.
    pub fn enable_capture(&mut self) -> Result<(), CaptureError> {
        if !terminal::is_raw_mode_enabled()? {
            return Err(CaptureError::RawModeRequired);
        }
        execute!(io::stdout(), EnableMouseCapture)?;
        self.capture_enabled = true;
        Ok(())
    }

    pub fn disable_capture(&mut self) -> Result<(), CaptureError> {
        if !self.capture_enabled {
            return Ok(());
        }
        execute!(io::stdout(), DisableMouseCapture)?;
        self.capture_enabled = false;
        Ok(())
    }

    /// Last key event the terminal delivered, if any. Keys never translate
    /// to pointer input; hosts drain them here for their own bindings.
    pub fn take_key(&mut self) -> Option<KeyEvent> {
        self.pending_key.take()
    }
}

impl PointerDriver for ConsolePointerDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Option<PointerEvent>> {
        match crossterm::event::read()? {
            Event::Mouse(mouse) => Ok(translate_mouse_event(&mouse, Instant::now())),
            Event::Key(key) => {
                self.pending_key = Some(key);
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Drop for ConsolePointerDriver {
    fn drop(&mut self) {
        let _ = self.disable_capture();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn buttons_translate_one_to_one() {
        let at = Instant::now();
        let event =
            translate_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 9), at)
                .unwrap();
        assert_eq!(event.kind, PointerEventKind::Down(PointerButton::Left));
        assert_eq!(event.position, Point::new(4.0, 9.0));

        let event = translate_mouse_event(&mouse(MouseEventKind::Up(MouseButton::Right), 0, 0), at)
            .unwrap();
        assert_eq!(event.kind, PointerEventKind::Up(PointerButton::Right));
    }

    #[test]
    fn drag_and_move_both_become_moves() {
        let at = Instant::now();
        for kind in [MouseEventKind::Drag(MouseButton::Left), MouseEventKind::Moved] {
            let event = translate_mouse_event(&mouse(kind, 7, 3), at).unwrap();
            assert_eq!(event.kind, PointerEventKind::Moved);
        }
    }

    #[test]
    fn scroll_translates_to_nothing() {
        let at = Instant::now();
        assert!(translate_mouse_event(&mouse(MouseEventKind::ScrollUp, 1, 1), at).is_none());
        assert!(translate_mouse_event(&mouse(MouseEventKind::ScrollDown, 1, 1), at).is_none());
    }
}
