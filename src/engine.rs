//! The gesture engine: registration, routing, and classification glue.
//!
//! One engine instance serves a whole timeline view. The host feeds it every
//! raw [`PointerEvent`] it sees plus an occasional [`GestureEngine::tick`]
//! while idle; the engine keeps at most one session in flight and publishes
//! one [`GestureEvent`] per completed gesture on its bus.
//!
//! Routing deliberately differs by device class, mirroring how the two
//! actually deliver events: mouse movement and release are tracked
//! engine-wide once a session is latched (a drag routinely leaves the
//! originating element's bounds), while touch events are matched against the
//! latched contact id, since a touch sequence belongs to the contact that
//! started it no matter where the finger travels.

use std::time::Instant;

use crate::bus::{GestureBus, SubscriberId};
use crate::config::GestureOverrides;
use crate::cursor::{CursorFeedback, CursorStyle};
use crate::events::GestureEvent;
use crate::geometry::{BoundsRect, Point};
use crate::pointer::{PointerButton, PointerEvent, PointerEventKind, PointerOrigin, TouchId};
use crate::registry::{ElementId, ElementRegistry};
use crate::session::{PressedSession, Session};
use crate::zone::detect_edge;

type CursorListener = Box<dyn FnMut(ElementId, CursorStyle)>;
type HapticTrigger = Box<dyn FnMut()>;

pub struct GestureEngine<P> {
    registry: ElementRegistry<P>,
    session: Session<P>,
    bus: GestureBus<P>,
    cursor: CursorFeedback,
    hovered: Option<ElementId>,
    cursor_listener: Option<CursorListener>,
    haptic: Option<HapticTrigger>,
}

impl<P: Clone> Default for GestureEngine<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> GestureEngine<P> {
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::new(),
            session: Session::Idle,
            bus: GestureBus::new(),
            cursor: CursorFeedback::new(),
            hovered: None,
            cursor_listener: None,
            haptic: None,
        }
    }

    /// Register a visual element. See [`ElementRegistry::register`].
    pub fn register(
        &mut self,
        bounds: BoundsRect,
        payload: P,
        overrides: GestureOverrides,
    ) -> ElementId {
        self.registry.register(bounds, payload, overrides)
    }

    /// Release a registration. Idempotent; a live session keeps the payload
    /// it captured at press time, so unregistering mid-gesture does not
    /// disturb classification.
    pub fn unregister(&mut self, id: ElementId) {
        self.registry.unregister(id);
        self.cursor.forget(id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Refresh an element's bounds after the caller's layout moved it.
    pub fn set_element_bounds(&mut self, id: ElementId, bounds: BoundsRect) {
        self.registry.set_bounds(id, bounds);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&GestureEvent<P>) + 'static) -> SubscriberId {
        self.bus.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.bus.unsubscribe(id);
    }

    /// Receive idempotent cursor style changes (hover affordances).
    pub fn set_cursor_listener(&mut self, listener: impl FnMut(ElementId, CursorStyle) + 'static) {
        self.cursor_listener = Some(Box::new(listener));
    }

    /// Invoked once per session when the long-press deadline fires.
    pub fn set_haptic_trigger(&mut self, trigger: impl FnMut() + 'static) {
        self.haptic = Some(Box::new(trigger));
    }

    pub fn is_gesture_active(&self) -> bool {
        self.session.is_active()
    }

    /// Element latched by the in-flight session, if any. Hosts that render
    /// their own ghost previews from raw moves key them off this.
    pub fn pressed_element(&self) -> Option<ElementId> {
        self.session.pressed().map(|pressed| pressed.element)
    }

    pub fn element_count(&self) -> usize {
        self.registry.len()
    }

    /// Drive the long-press deadline between input events. Hosts call this
    /// from their idle loop; a deadline is otherwise only checked when the
    /// next event happens to arrive.
    pub fn tick(&mut self, now: Instant) {
        self.refresh_long_press(now);
    }

    /// Route one raw pointer event through the state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        // Deadlines are wall-clock ordered with the event stream: arm first,
        // then let the event act on the armed session.
        self.refresh_long_press(event.at);
        match event.kind {
            PointerEventKind::Down(PointerButton::Left) => {
                self.begin_session(PointerOrigin::Mouse, event.position, event.at);
            }
            // non-primary buttons never start or disturb a session
            PointerEventKind::Down(_) => {}
            PointerEventKind::Up(PointerButton::Left) => {
                self.finish_mouse(event.position, event.at);
            }
            PointerEventKind::Up(_) => {}
            PointerEventKind::Moved => self.observe_mouse_move(event.position),
            PointerEventKind::TouchStart(contact) => {
                if self.session.is_active() {
                    // second simultaneous contact: ignored outright, the live
                    // session keeps its origin untouched
                    tracing::debug!(?contact, "extra touch contact ignored");
                    return;
                }
                self.begin_session(PointerOrigin::Touch(contact), event.position, event.at);
            }
            PointerEventKind::TouchMoved(contact) => self.observe_touch_move(contact, event.position),
            PointerEventKind::TouchEnd(contact) => {
                self.finish_touch(contact, event.position, event.at);
            }
            PointerEventKind::TouchCancelled(contact) => self.cancel_touch(contact),
        }
    }

    fn refresh_long_press(&mut self, now: Instant) {
        let armed = match &mut self.session {
            Session::Pressed(pressed) => pressed.refresh_long_press(now),
            Session::Idle => false,
        };
        if armed && let Some(trigger) = self.haptic.as_mut() {
            trigger();
        }
    }

    fn begin_session(&mut self, origin: PointerOrigin, position: Point, at: Instant) {
        if self.session.is_active() {
            return;
        }
        let Some(id) = self.registry.hit_test_topmost(position) else {
            return;
        };
        let Some(element) = self.registry.get(id) else {
            return;
        };
        let pressed = PressedSession::latch(id, element, origin, position, at);
        // press freezes the cursor affordance to the latched decision; hover
        // recomputation stays off until the session ends
        let style = CursorStyle::for_zone(pressed.resize_edge, pressed.config.direction);
        self.session = Session::Pressed(pressed);
        self.push_cursor(id, style);
    }

    fn observe_mouse_move(&mut self, position: Point) {
        if let Session::Pressed(pressed) = &mut self.session {
            // tracked engine-wide even outside the element's bounds
            if pressed.origin == PointerOrigin::Mouse {
                pressed.observe_move(position);
            }
            return;
        }
        self.update_hover(position);
    }

    fn observe_touch_move(&mut self, contact: TouchId, position: Point) {
        if let Session::Pressed(pressed) = &mut self.session
            && pressed.origin == PointerOrigin::Touch(contact)
        {
            pressed.observe_move(position);
        }
    }

    fn finish_mouse(&mut self, position: Point, at: Instant) {
        let pressed = match std::mem::replace(&mut self.session, Session::Idle) {
            Session::Pressed(pressed) if pressed.origin == PointerOrigin::Mouse => pressed,
            other => {
                self.session = other;
                return;
            }
        };
        let event = pressed.classify(position, at);
        self.bus.emit(&event);
    }

    fn finish_touch(&mut self, contact: TouchId, position: Point, at: Instant) {
        let pressed = match std::mem::replace(&mut self.session, Session::Idle) {
            Session::Pressed(pressed) if pressed.origin == PointerOrigin::Touch(contact) => pressed,
            other => {
                self.session = other;
                return;
            }
        };
        let event = pressed.classify(position, at);
        self.bus.emit(&event);
    }

    /// Silent teardown: the platform withdrew the touch, nothing is emitted.
    fn cancel_touch(&mut self, contact: TouchId) {
        let pressed = match std::mem::replace(&mut self.session, Session::Idle) {
            Session::Pressed(pressed) if pressed.origin == PointerOrigin::Touch(contact) => pressed,
            other => {
                self.session = other;
                return;
            }
        };
        tracing::debug!(element = ?pressed.element, "touch cancelled, session reset");
    }

    fn update_hover(&mut self, position: Point) {
        let hit = self.registry.hit_test_topmost(position);
        // leaving an element reverts it to the default affordance
        if let Some(previous) = self.hovered
            && hit != Some(previous)
        {
            self.push_cursor(previous, CursorStyle::Grab);
        }
        self.hovered = hit;
        let Some(id) = hit else {
            return;
        };
        let Some(element) = self.registry.get(id) else {
            return;
        };
        let edge = detect_edge(position, element.bounds, &element.config);
        let style = CursorStyle::for_zone(edge, element.config.direction);
        self.push_cursor(id, style);
    }

    fn push_cursor(&mut self, id: ElementId, style: CursorStyle) {
        if let Some(changed) = self.cursor.apply(id, style)
            && let Some(listener) = self.cursor_listener.as_mut()
        {
            listener(id, changed);
        }
    }
}
