//! Element registration and hit testing.
//!
//! A timeline registers one element per visible task, fragment, and resize
//! handle, each carrying an opaque payload and a resolved [`GestureConfig`].
//! Timelines recreate their visuals on every data refresh, so registrations
//! churn constantly: unregister is idempotent and bounds can be refreshed in
//! place between presses.

use std::collections::BTreeMap;

use crate::config::{GestureConfig, GestureOverrides};
use crate::geometry::{BoundsRect, Point, rect_contains};

/// Handle to one registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// One registered visual element.
#[derive(Debug, Clone)]
pub struct RegisteredElement<P> {
    pub bounds: BoundsRect,
    /// Opaque domain payload handed back verbatim inside every gesture event
    /// classified on this element.
    pub payload: P,
    pub config: GestureConfig,
}

/// All currently registered elements, in stacking order.
#[derive(Debug)]
pub struct ElementRegistry<P> {
    elements: BTreeMap<ElementId, RegisteredElement<P>>,
    // stacking order: later registrations sit on top for hit testing
    order: Vec<ElementId>,
    next_id: u64,
    shared_mouse_route: bool,
}

impl<P> Default for ElementRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ElementRegistry<P> {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            order: Vec::new(),
            next_id: 0,
            shared_mouse_route: false,
        }
    }

    /// Register an element. Never blocks or displaces sibling registrations.
    ///
    /// The first registration ever also installs the engine-wide mouse
    /// route: mouse movement and release are tracked engine-wide rather than
    /// per element, because a drag routinely leaves the bounds of the element
    /// it started on and must still be followed to release.
    pub fn register(
        &mut self,
        bounds: BoundsRect,
        payload: P,
        overrides: GestureOverrides,
    ) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        if !self.shared_mouse_route {
            self.shared_mouse_route = true;
            tracing::debug!("installed shared mouse route");
        }
        self.elements.insert(
            id,
            RegisteredElement {
                bounds,
                payload,
                config: GestureConfig::resolve(overrides),
            },
        );
        self.order.push(id);
        tracing::debug!(element = ?id, "registered element");
        id
    }

    /// Remove a registration. Safe to call any number of times; removing an
    /// id that is already gone does nothing.
    pub fn unregister(&mut self, id: ElementId) {
        if self.elements.remove(&id).is_none() {
            return;
        }
        self.order.retain(|existing| *existing != id);
        tracing::debug!(element = ?id, "unregistered element");
    }

    /// Refresh an element's bounds after the caller's layout moved it.
    /// Unknown ids are ignored.
    pub fn set_bounds(&mut self, id: ElementId, bounds: BoundsRect) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.bounds = bounds;
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&RegisteredElement<P>> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the engine-wide mouse route has been installed (it is, from
    /// the first registration on, and is never torn back down).
    pub fn shared_mouse_route(&self) -> bool {
        self.shared_mouse_route
    }

    /// Topmost element under `position`: later registrations win, matching a
    /// timeline that renders handles on top of the fragments they belong to.
    pub fn hit_test_topmost(&self, position: Point) -> Option<ElementId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.elements
                    .get(id)
                    .is_some_and(|element| rect_contains(element.bounds, position.x, position.y))
            })
    }
}
