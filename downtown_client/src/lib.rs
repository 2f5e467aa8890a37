//! `downtown_client`
//!
//! Client-side core for the top-down multiplayer game:
//! - Input sampling and per-frame forwarding
//! - Drivable entities (car, person) with local prediction
//! - Possession arbitration and the action/transfer protocol
//! - Collision-gated movement with bounded bump recovery
//! - Reconciliation of remote entities toward server snapshots

pub mod bump;
pub mod car;
pub mod controller;
pub mod entity;
pub mod frame;
pub mod input;
pub mod person;
pub mod reconcile;

pub use controller::PlayerController;
