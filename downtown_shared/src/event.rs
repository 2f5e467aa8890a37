//! Client event notifications.
//!
//! Replaces ad hoc callback dispatch with a queue the render/camera layer
//! drains once per frame. Push never blocks; draining hands the whole
//! batch over in emission order.

use crate::state::EntityId;

/// Things the core announces to observers (camera rig, HUD).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Local possession moved from `previous` to `current`.
    PossessionChanged {
        previous: EntityId,
        current: EntityId,
    },
    /// An entity started its invalid-move recovery.
    BumpStarted { entity: EntityId },
}

/// FIFO queue of pending [`ClientEvent`]s.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<ClientEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ClientEvent) {
        self.pending.push(event);
    }

    /// Drains all queued events.
    pub fn drain(&mut self) -> Vec<ClientEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
