//! Per-registration gesture configuration.

use std::time::Duration;

use crate::constants::{DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_LONG_PRESS, DEFAULT_RESIZE_ZONE_PX};
use crate::zone::ResizeEdge;

/// Axis (or axes) along which an element interprets drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
    /// Classify along whichever axis saw the larger displacement.
    Both,
}

/// Resolved configuration attached to one registered element.
///
/// Immutable for the lifetime of the registration; build one from partial
/// [`GestureOverrides`] via [`GestureConfig::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub direction: Axis,
    /// Per-axis travel (pixels) separating taps from drags.
    pub drag_threshold: f64,
    /// Hold time before a stationary touch press arms as a long-press.
    pub long_press_duration: Duration,
    /// Width (pixels) of the start/end resize zones along `direction`.
    pub resize_zone_width: f64,
    pub enable_resize: bool,
    /// Forces every press on this element to resize the given edge,
    /// bypassing the geometric zone test. For dedicated handle elements.
    pub fixed_resize_edge: Option<ResizeEdge>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            direction: Axis::Horizontal,
            drag_threshold: DEFAULT_DRAG_THRESHOLD_PX,
            long_press_duration: DEFAULT_LONG_PRESS,
            resize_zone_width: DEFAULT_RESIZE_ZONE_PX,
            enable_resize: false,
            fixed_resize_edge: None,
        }
    }
}

impl GestureConfig {
    /// Merge partial overrides onto the engine defaults.
    pub fn resolve(overrides: GestureOverrides) -> Self {
        let defaults = Self::default();
        Self {
            direction: overrides.direction.unwrap_or(defaults.direction),
            drag_threshold: overrides.drag_threshold.unwrap_or(defaults.drag_threshold),
            long_press_duration: overrides
                .long_press_duration
                .unwrap_or(defaults.long_press_duration),
            resize_zone_width: overrides
                .resize_zone_width
                .unwrap_or(defaults.resize_zone_width),
            enable_resize: overrides.enable_resize.unwrap_or(defaults.enable_resize),
            fixed_resize_edge: overrides.fixed_resize_edge,
        }
    }
}

/// Partial configuration supplied at registration time. Unset fields fall
/// back to the engine defaults in [`crate::constants`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureOverrides {
    pub direction: Option<Axis>,
    pub drag_threshold: Option<f64>,
    pub long_press_duration: Option<Duration>,
    pub resize_zone_width: Option<f64>,
    pub enable_resize: Option<bool>,
    pub fixed_resize_edge: Option<ResizeEdge>,
}

impl GestureOverrides {
    pub fn direction(mut self, direction: Axis) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn drag_threshold(mut self, pixels: f64) -> Self {
        self.drag_threshold = Some(pixels);
        self
    }

    pub fn long_press_duration(mut self, duration: Duration) -> Self {
        self.long_press_duration = Some(duration);
        self
    }

    pub fn resize_zone_width(mut self, pixels: f64) -> Self {
        self.resize_zone_width = Some(pixels);
        self
    }

    pub fn enable_resize(mut self, enabled: bool) -> Self {
        self.enable_resize = Some(enabled);
        self
    }

    /// Turn the element into a dedicated resize handle for `edge`.
    /// Implies `enable_resize` unless explicitly disabled.
    pub fn fixed_resize_edge(mut self, edge: ResizeEdge) -> Self {
        self.fixed_resize_edge = Some(edge);
        if self.enable_resize.is_none() {
            self.enable_resize = Some(true);
        }
        self
    }
}
