//! The press-to-release session and its classifier.
//!
//! Exactly one session exists per engine at any instant. It is latched by a
//! press, observes movement only to arm or disarm the long-press deadline,
//! and classifies the whole interaction once at release. Every terminal path
//! returns the engine to [`Session::Idle`] with nothing carried over.

use std::time::Instant;

use crate::config::{Axis, GestureConfig};
use crate::events::{GestureEvent, GestureKind};
use crate::geometry::Point;
use crate::pointer::PointerOrigin;
use crate::registry::{ElementId, RegisteredElement};
use crate::zone::{ResizeEdge, detect_edge};

/// Fully-enumerated session state. The source of truth for "is a gesture in
/// flight"; no nullable field soup.
#[derive(Debug)]
pub enum Session<P> {
    Idle,
    Pressed(PressedSession<P>),
}

impl<P> Session<P> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pressed(_))
    }

    pub fn pressed(&self) -> Option<&PressedSession<P>> {
        match self {
            Self::Idle => None,
            Self::Pressed(pressed) => Some(pressed),
        }
    }
}

/// The live record of one physical press.
///
/// `payload` and `config` are snapshots taken when the press latched, so a
/// registration churning mid-gesture cannot change the gesture's meaning.
/// The resize decision is likewise frozen here: the pointer drifting into a
/// different zone mid-drag does not re-classify the session.
#[derive(Debug)]
pub struct PressedSession<P> {
    pub element: ElementId,
    pub payload: P,
    pub config: GestureConfig,
    pub origin: PointerOrigin,
    pub start: Point,
    pub pressed_at: Instant,
    pub resize_edge: Option<ResizeEdge>,
    /// Pending long-press deadline; `None` for mouse sessions and for touch
    /// sessions whose movement already disarmed it.
    pub long_press_deadline: Option<Instant>,
    pub long_press_armed: bool,
}

impl<P: Clone> PressedSession<P> {
    /// Latch a session from a press on a registered element.
    pub fn latch(
        id: ElementId,
        element: &RegisteredElement<P>,
        origin: PointerOrigin,
        start: Point,
        at: Instant,
    ) -> Self {
        let resize_edge = detect_edge(start, element.bounds, &element.config);
        let long_press_deadline = origin
            .is_touch()
            .then(|| at + element.config.long_press_duration);
        tracing::debug!(element = ?id, ?origin, edge = ?resize_edge, "session latched");
        Self {
            element: id,
            payload: element.payload.clone(),
            config: element.config,
            origin,
            start,
            pressed_at: at,
            resize_edge,
            long_press_deadline,
            long_press_armed: false,
        }
    }
}

impl<P> PressedSession<P> {
    /// Arm the long-press if its deadline has passed. Returns true exactly
    /// once, when the session arms; the caller fires haptics off that.
    pub fn refresh_long_press(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.long_press_deadline
            && now >= deadline
        {
            self.long_press_deadline = None;
            self.long_press_armed = true;
            tracing::debug!(element = ?self.element, "long-press armed");
            return true;
        }
        false
    }

    /// Track movement. Travel past the drag threshold on either axis
    /// permanently disarms a pending long-press; it never re-arms even if
    /// the contact returns to its origin.
    pub fn observe_move(&mut self, position: Point) {
        if self.long_press_deadline.is_none() {
            return;
        }
        let dx = (position.x - self.start.x).abs();
        let dy = (position.y - self.start.y).abs();
        if dx > self.config.drag_threshold || dy > self.config.drag_threshold {
            self.long_press_deadline = None;
        }
    }

    /// Classify the completed gesture at release, consuming the session.
    pub fn classify(self, end: Point, at: Instant) -> GestureEvent<P> {
        let delta_x = end.x - self.start.x;
        let delta_y = end.y - self.start.y;
        let duration = at.saturating_duration_since(self.pressed_at);
        let below_threshold = delta_x.abs() < self.config.drag_threshold
            && delta_y.abs() < self.config.drag_threshold;

        let kind = if below_threshold && self.origin.is_touch() && self.long_press_armed {
            GestureKind::LongPress
        } else if below_threshold {
            GestureKind::Tap
        } else if let Some(edge) = self.resize_edge {
            // direction of travel is irrelevant once a resize is latched
            match edge {
                ResizeEdge::Start => GestureKind::ResizeStart,
                ResizeEdge::End => GestureKind::ResizeEnd,
            }
        } else {
            classify_drag(self.config.direction, delta_x, delta_y)
        };

        let travel = self.start.distance_to(end);
        let seconds = duration.as_secs_f64();
        let velocity_px_per_sec = if seconds > 0.0 { travel / seconds } else { 0.0 };

        tracing::debug!(
            element = ?self.element,
            kind = kind.as_str(),
            delta_x,
            delta_y,
            "gesture classified"
        );

        GestureEvent {
            kind,
            element: self.element,
            start: self.start,
            end,
            delta_x,
            delta_y,
            duration,
            velocity_px_per_sec,
            payload: self.payload,
        }
    }
}

fn classify_drag(direction: Axis, delta_x: f64, delta_y: f64) -> GestureKind {
    match direction {
        Axis::Horizontal => horizontal_drag(delta_x),
        Axis::Vertical => vertical_drag(delta_y),
        // dominant axis wins; an exact tie falls to horizontal
        Axis::Both => {
            if delta_x.abs() >= delta_y.abs() {
                horizontal_drag(delta_x)
            } else {
                vertical_drag(delta_y)
            }
        }
    }
}

fn horizontal_drag(delta_x: f64) -> GestureKind {
    if delta_x > 0.0 {
        GestureKind::DragRight
    } else {
        GestureKind::DragLeft
    }
}

fn vertical_drag(delta_y: f64) -> GestureKind {
    if delta_y > 0.0 {
        GestureKind::DragDown
    } else {
        GestureKind::DragUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::GestureOverrides;
    use crate::geometry::BoundsRect;
    use crate::pointer::TouchId;

    fn element(overrides: GestureOverrides) -> RegisteredElement<&'static str> {
        RegisteredElement {
            bounds: BoundsRect::new(0.0, 0.0, 200.0, 40.0),
            payload: "task-3",
            config: GestureConfig::resolve(overrides),
        }
    }

    fn press(
        element: &RegisteredElement<&'static str>,
        origin: PointerOrigin,
        start: Point,
    ) -> (PressedSession<&'static str>, Instant) {
        let at = Instant::now();
        (
            PressedSession::latch(ElementId(0), element, origin, start, at),
            at,
        )
    }

    #[test]
    fn small_mouse_release_is_a_tap() {
        let element = element(GestureOverrides::default());
        let start = Point::new(100.0, 20.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        let event = session.classify(Point::new(104.0, 22.0), at + Duration::from_millis(120));
        assert_eq!(event.kind, GestureKind::Tap);
        assert_eq!(event.payload, "task-3");
    }

    #[test]
    fn horizontal_drag_right() {
        let element = element(GestureOverrides::default().drag_threshold(15.0));
        let start = Point::new(100.0, 20.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        let event = session.classify(Point::new(140.0, 25.0), at + Duration::from_millis(300));
        assert_eq!(event.kind, GestureKind::DragRight);
        assert_eq!(event.delta_x, 40.0);
        assert_eq!(event.delta_y, 5.0);
    }

    #[test]
    fn vertical_drag_up() {
        let element = element(
            GestureOverrides::default()
                .direction(Axis::Vertical)
                .drag_threshold(15.0),
        );
        let start = Point::new(100.0, 20.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        let event = session.classify(Point::new(105.0, -20.0), at + Duration::from_millis(300));
        assert_eq!(event.kind, GestureKind::DragUp);
    }

    #[test]
    fn both_axis_picks_dominant_delta() {
        let element = element(GestureOverrides::default().direction(Axis::Both));
        let start = Point::new(0.0, 0.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        let event = session.classify(Point::new(20.0, 60.0), at + Duration::from_millis(200));
        assert_eq!(event.kind, GestureKind::DragDown);
    }

    #[test]
    fn resize_latched_at_press_ignores_travel_direction() {
        let element = element(
            GestureOverrides::default()
                .enable_resize(true)
                .resize_zone_width(10.0),
        );
        // press inside the start zone, then drag far to the right
        let start = Point::new(3.0, 20.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        assert_eq!(session.resize_edge, Some(ResizeEdge::Start));
        let event = session.classify(Point::new(160.0, 20.0), at + Duration::from_millis(400));
        assert_eq!(event.kind, GestureKind::ResizeStart);
    }

    #[test]
    fn fixed_edge_classifies_every_release() {
        let element = element(GestureOverrides::default().fixed_resize_edge(ResizeEdge::End));
        for end in [Point::new(60.0, 20.0), Point::new(180.0, 38.0)] {
            let (session, at) = press(&element, PointerOrigin::Mouse, Point::new(120.0, 20.0));
            let event = session.classify(end, at + Duration::from_millis(250));
            assert_eq!(event.kind, GestureKind::ResizeEnd);
        }
    }

    #[test]
    fn stationary_resize_zone_press_is_still_a_tap() {
        let element = element(
            GestureOverrides::default()
                .enable_resize(true)
                .resize_zone_width(10.0),
        );
        let (session, at) = press(&element, PointerOrigin::Mouse, Point::new(3.0, 20.0));
        let event = session.classify(Point::new(4.0, 21.0), at + Duration::from_millis(90));
        assert_eq!(event.kind, GestureKind::Tap);
    }

    #[test]
    fn touch_long_press_arms_and_classifies() {
        let element = element(GestureOverrides::default());
        let start = Point::new(50.0, 20.0);
        let (mut session, at) =
            press(&element, PointerOrigin::Touch(TouchId(1)), start);
        assert!(!session.refresh_long_press(at + Duration::from_millis(100)));
        assert!(session.refresh_long_press(at + Duration::from_millis(600)));
        // arming reports once
        assert!(!session.refresh_long_press(at + Duration::from_millis(700)));
        let event = session.classify(Point::new(52.0, 20.0), at + Duration::from_millis(800));
        assert_eq!(event.kind, GestureKind::LongPress);
    }

    #[test]
    fn movement_disarms_long_press_for_good() {
        let element = element(GestureOverrides::default().drag_threshold(15.0));
        let start = Point::new(50.0, 20.0);
        let (mut session, at) =
            press(&element, PointerOrigin::Touch(TouchId(1)), start);
        session.observe_move(Point::new(80.0, 20.0));
        // back to the origin before the deadline; still disarmed
        session.observe_move(start);
        assert!(!session.refresh_long_press(at + Duration::from_secs(2)));
        let event = session.classify(start, at + Duration::from_secs(2));
        assert_eq!(event.kind, GestureKind::Tap);
    }

    #[test]
    fn armed_long_press_followed_by_drag_classifies_as_drag() {
        let element = element(GestureOverrides::default());
        let start = Point::new(50.0, 20.0);
        let (mut session, at) =
            press(&element, PointerOrigin::Touch(TouchId(4)), start);
        assert!(session.refresh_long_press(at + Duration::from_millis(600)));
        let event = session.classify(Point::new(120.0, 22.0), at + Duration::from_millis(900));
        assert_eq!(event.kind, GestureKind::DragRight);
    }

    #[test]
    fn velocity_is_travel_over_duration() {
        let element = element(GestureOverrides::default());
        let start = Point::new(0.0, 0.0);
        let (session, at) = press(&element, PointerOrigin::Mouse, start);
        let event = session.classify(Point::new(30.0, 40.0), at + Duration::from_millis(500));
        // 50px over half a second
        assert!((event.velocity_px_per_sec - 100.0).abs() < 1e-9);
        assert_eq!(event.duration, Duration::from_millis(500));
    }

    #[test]
    fn zero_duration_release_has_zero_velocity() {
        let element = element(GestureOverrides::default());
        let (session, at) = press(&element, PointerOrigin::Mouse, Point::new(0.0, 0.0));
        let event = session.classify(Point::new(40.0, 0.0), at);
        assert_eq!(event.velocity_px_per_sec, 0.0);
    }

    #[test]
    fn mouse_sessions_never_arm() {
        let element = element(GestureOverrides::default());
        let (mut session, at) = press(&element, PointerOrigin::Mouse, Point::new(0.0, 0.0));
        assert_eq!(session.long_press_deadline, None);
        assert!(!session.refresh_long_press(at + Duration::from_secs(5)));
        let event = session.classify(Point::new(1.0, 1.0), at + Duration::from_secs(5));
        assert_eq!(event.kind, GestureKind::Tap);
    }
}
