//! One-shot frame timers.
//!
//! Stand-in for the host engine's delayed-call facility. Callbacks are
//! fire-and-forget: scheduled once, delivered once when due, never
//! cancelled. Consumers that outlive their subject simply drop the event
//! on delivery.

use crate::state::EntityId;

/// What a timer does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Bump recovery finished; clear the entity's bumping flag.
    BumpRecovered(EntityId),
    /// Clear the bump tint flash.
    TintClear(EntityId),
}

#[derive(Debug, Clone)]
struct Pending {
    fire_at_ms: f32,
    event: TimerEvent,
}

/// Schedules one-shot events against the frame clock.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Vec<Pending>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at_ms: f32, event: TimerEvent) {
        self.pending.push(Pending { fire_at_ms, event });
    }

    /// Removes and returns every event due at `now_ms`, in schedule order.
    pub fn due(&mut self, now_ms: f32) -> Vec<TimerEvent> {
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if p.fire_at_ms <= now_ms {
                fired.push(p.event.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
