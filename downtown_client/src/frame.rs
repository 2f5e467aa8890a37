//! Per-frame context.
//!
//! The host engine drives one update per frame; everything an entity needs
//! during that update travels together here so entity code never reaches
//! for globals.

use downtown_shared::config::ClientConfig;
use downtown_shared::event::EventQueue;
use downtown_shared::surface::TileSurface;
use downtown_shared::timer::FrameScheduler;

/// Borrowed view of the frame the current update runs in.
pub struct FrameCtx<'a> {
    /// Frame clock, milliseconds since session start.
    pub time_ms: f32,
    /// Time since the previous frame, milliseconds.
    pub delta_ms: f32,
    pub surface: &'a TileSurface,
    pub scheduler: &'a mut FrameScheduler,
    pub events: &'a mut EventQueue,
    pub config: &'a ClientConfig,
}

impl FrameCtx<'_> {
    /// Delta in seconds, the unit the kinematics integrate in.
    pub fn dt(&self) -> f32 {
        self.delta_ms / 1000.0
    }
}
