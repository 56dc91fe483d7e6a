//! A pointer/touch gesture recognizer for direct-manipulation timeline views.
//!
//! Timelines register one element per visible task, fragment, or resize
//! handle, each with an opaque payload and a [`config::GestureConfig`]. The
//! host feeds raw [`pointer::PointerEvent`]s into an
//! [`engine::GestureEngine`]; the engine latches a single session per press,
//! classifies the completed interaction at release (tap, long-press,
//! directional drag, edge resize), and publishes one
//! [`events::GestureEvent`] per gesture to its subscribers. The
//! [`time_map`] helpers then turn a gesture's pixel delta into snapped
//! time-domain values for the caller's dialogs.
//!
//! The engine performs no rendering and holds no domain knowledge: payloads
//! pass through untouched and previews stay the host's job.

pub mod bus;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod drivers;
pub mod engine;
pub mod event_loop;
pub mod events;
pub mod geometry;
pub mod pointer;
pub mod registry;
pub mod session;
pub mod time_map;
pub mod tracing_sub;
pub mod zone;

pub use config::{Axis, GestureConfig, GestureOverrides};
pub use cursor::CursorStyle;
pub use engine::GestureEngine;
pub use events::{GestureEvent, GestureKind};
pub use geometry::{BoundsRect, Point};
pub use pointer::{PointerButton, PointerEvent, PointerEventKind, TouchId};
pub use registry::ElementId;
pub use zone::ResizeEdge;
