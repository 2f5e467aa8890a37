//! Configuration system.
//!
//! Loads client tuning from JSON strings/files (file IO left to app).

use serde::{Deserialize, Serialize};

/// Client-side tuning knobs.
///
/// Everything here is a local constant from the server's point of view;
/// authoritative per-entity parameters (max speed, acceleration, rotation
/// speed) always come from the entity's state record instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Expected cadence of server snapshots, used as the lerp window.
    #[serde(default = "default_snapshot_interval_ms")]
    pub snapshot_interval_ms: f32,
    /// Fraction of full rotation authority left at max speed.
    #[serde(default = "default_min_rotation_factor")]
    pub min_rotation_factor: f32,
    /// Speed lost per second while braking.
    #[serde(default = "default_braking")]
    pub braking: f32,
    /// Speed lost per second while coasting.
    #[serde(default = "default_deceleration")]
    pub deceleration: f32,
    /// Pedestrian walk speed, pixels per second.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Backward-search step when recovering from an invalid move.
    #[serde(default = "default_bump_step")]
    pub bump_step: f32,
    /// Maximum cumulative backward-search offset.
    #[serde(default = "default_bump_max_offset")]
    pub bump_max_offset: f32,
    /// Offset applied when the backward search finds no valid tile.
    #[serde(default = "default_bump_fallback_offset")]
    pub bump_fallback_offset: f32,
    /// How long the bump visual (and input lockout) lasts.
    #[serde(default = "default_bump_duration_ms")]
    pub bump_duration_ms: f32,
}

fn default_snapshot_interval_ms() -> f32 {
    64.0
}

fn default_min_rotation_factor() -> f32 {
    0.2
}

fn default_braking() -> f32 {
    150.0
}

fn default_deceleration() -> f32 {
    80.0
}

fn default_walk_speed() -> f32 {
    80.0
}

fn default_bump_step() -> f32 {
    5.0
}

fn default_bump_max_offset() -> f32 {
    30.0
}

fn default_bump_fallback_offset() -> f32 {
    10.0
}

fn default_bump_duration_ms() -> f32 {
    150.0
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            snapshot_interval_ms: default_snapshot_interval_ms(),
            min_rotation_factor: default_min_rotation_factor(),
            braking: default_braking(),
            deceleration: default_deceleration(),
            walk_speed: default_walk_speed(),
            bump_step: default_bump_step(),
            bump_max_offset: default_bump_max_offset(),
            bump_fallback_offset: default_bump_fallback_offset(),
            bump_duration_ms: default_bump_duration_ms(),
        }
    }
}

impl ClientConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
