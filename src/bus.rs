//! Gesture event fan-out.
//!
//! A plain subscriber list: no framework stream, no threads. Callbacks run
//! synchronously on the host's UI thread, in subscription order, one
//! completed gesture at a time.

use crate::events::GestureEvent;

/// Handle returned by [`GestureBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

type Callback<P> = Box<dyn FnMut(&GestureEvent<P>)>;

pub struct GestureBus<P> {
    subscribers: Vec<(SubscriberId, Callback<P>)>,
    next_id: u64,
}

impl<P> Default for GestureBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> GestureBus<P> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&GestureEvent<P>) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored, so dropping the same
    /// subscription twice is harmless.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver one event to every subscriber, in subscription order.
    pub fn emit(&mut self, event: &GestureEvent<P>) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
