//! `downtown_shared`
//!
//! Libraries shared across the client core.
//!
//! Design goals:
//! - Deterministic and modular where practical.
//! - Clear separation of concerns (math, state records, config, render,
//!   timers, collision surface, events).
//! - No graphics or transport dependency; those stay behind the host
//!   engine and RPC boundaries.
//! - No `unsafe`.

pub mod config;
pub mod event;
pub mod math;
pub mod render;
pub mod state;
pub mod surface;
pub mod timer;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::event::*;
    pub use crate::math::*;
    pub use crate::render::*;
    pub use crate::state::*;
    pub use crate::surface::*;
    pub use crate::timer::*;
}
