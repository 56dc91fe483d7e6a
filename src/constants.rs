//! Shared crate-wide constants.

use std::time::Duration;

/// Default distance (pixels, per axis) the pointer must travel before a press
/// stops being a tap and starts being a drag.
///
/// Compared independently against |dx| and |dy|, not against the combined
/// travel. Small enough that deliberate drags register quickly, large enough
/// that the jitter of a fingertip resting on glass still classifies as a tap.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 15.0;

/// Default hold time before a stationary touch press arms as a long-press.
///
/// Touch only; mouse sessions never arm. Any travel past the drag threshold
/// before the deadline cancels arming for the rest of the session.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Default width (pixels) of the resize zones hugging an element's start and
/// end edges along its configured axis.
///
/// A press landing inside a zone latches the whole session as a resize of
/// that edge. Keep this comfortably below half of the shortest element the
/// caller renders, otherwise both zones overlap and the start edge wins every
/// press.
pub const DEFAULT_RESIZE_ZONE_PX: f64 = 10.0;

/// Default snap interval (minutes) for [`crate::time_map::time_shift`].
pub const DEFAULT_SNAP_MINUTES: i64 = 15;

/// Floor (minutes) a resize can shrink a duration to.
pub const DEFAULT_MIN_DURATION_MINUTES: i64 = 15;

/// Snap interval (minutes) applied to resized durations.
///
/// Deliberately a separate constant from [`DEFAULT_SNAP_MINUTES`]: duration
/// snapping is fixed at 15 regardless of the snap interval a caller picks for
/// shifts, and existing consumers depend on both values exactly.
pub const DURATION_SNAP_MINUTES: i64 = 15;
