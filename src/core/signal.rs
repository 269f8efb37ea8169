//! Per-entity change notifications.
//!
//! Every observable entity owns one [`Signal`] carrying its own event enum.
//! Subscribers are plain closures; they are dropped together with the
//! entity and are never cloned or persisted.

use std::fmt;

/// Handle returned by [`Signal::connect`], used to disconnect later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

type Slot<E> = Box<dyn FnMut(&E)>;

pub struct Signal<E> {
    slots: Vec<(SlotId, Slot<E>)>,
    next_id: u64,
    muted: bool,
}

impl<E> Signal<E> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            muted: false,
        }
    }

    pub fn connect<F>(&mut self, slot: F) -> SlotId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Returns false if the slot was not connected.
    pub fn disconnect(&mut self, id: SlotId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    /// Calls every connected slot in connection order, unless muted.
    pub fn emit(&mut self, event: &E) {
        if self.muted {
            return;
        }
        for (_, slot) in self.slots.iter_mut() {
            slot(event);
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones start with no subscribers.
impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.len())
            .field("muted", &self.muted)
            .finish()
    }
}
