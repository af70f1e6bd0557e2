//! Ordered, synchronous publish/subscribe keyed by event kind.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{Event, EventKind};

/// Opaque token identifying a registered handler, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(&Event<'_>)>;

/// A single-threaded event bus.
///
/// Delivery is synchronous and in handler-registration order per kind;
/// an `emit` for one kind never interleaves with another, the whole bus
/// call stack is nested inside the walker's recursion. One bus instance
/// is scoped to one pipeline, never shared process-wide.
///
/// Registering or unregistering handlers from inside a running handler is
/// unsupported and panics on the interior borrow rather than observing
/// inconsistent iteration.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<HashMap<EventKind, Vec<(HandlerId, Handler)>>>,
    next_id: Cell<u64>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind.
    ///
    /// Returns a token for [`EventBus::off`].
    pub fn on<F>(&self, kind: EventKind, handler: F) -> HandlerId
    where
        F: FnMut(&Event<'_>) + 'static,
    {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Unsubscribe a handler. Returns whether a handler was removed.
    pub fn off(&self, kind: EventKind, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.get_mut(&kind) {
            Some(list) => {
                let before = list.len();
                list.retain(|(registered, _)| *registered != id);
                before != list.len()
            }
            None => false,
        }
    }

    /// Deliver an event to every handler subscribed to its kind, in
    /// registration order.
    pub fn emit(&self, event: &Event<'_>) {
        let mut handlers = self.handlers.borrow_mut();
        if let Some(list) = handlers.get_mut(&event.kind()) {
            for (_, handler) in list.iter_mut() {
                handler(event);
            }
        }
    }

    /// Number of handlers currently subscribed to a kind.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers
            .borrow()
            .get(&kind)
            .map_or(0, |list| list.len())
    }
}
