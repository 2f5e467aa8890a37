//! Invalid-move recovery.
//!
//! When the collision probe rejects a predicted move the entity is knocked
//! back along the opposite of its travel direction: a bounded search walks
//! backward in fixed increments and commits the first valid position, with
//! a fixed fallback offset if the whole budget is exhausted. A debounce
//! flag (owned by the entity) keeps the recovery from re-triggering every
//! frame while the player holds input against a wall.

use downtown_shared::event::ClientEvent;
use downtown_shared::math::Vec2;
use downtown_shared::render::Sprite;
use downtown_shared::state::EntityId;
use downtown_shared::surface::TileSurface;
use downtown_shared::timer::TimerEvent;
use downtown_shared::config::ClientConfig;
use tracing::debug;

use crate::frame::FrameCtx;

/// Flash color applied while the bump visual runs.
pub const BUMP_TINT: u32 = 0xff_44_44;

/// Walks backward from `from` against `travel_dir` until a walkable tile
/// is found, probing every `bump_step` up to `bump_max_offset`. Falls back
/// to a fixed offset so the entity never stays on an invalid position.
pub fn recover_position(
    from: Vec2,
    travel_dir: Vec2,
    surface: &TileSurface,
    config: &ClientConfig,
) -> Vec2 {
    let len = travel_dir.len();
    if len == 0.0 {
        return from;
    }
    let back = travel_dir.scale(-1.0 / len);

    let mut offset = config.bump_step;
    while offset <= config.bump_max_offset {
        let candidate = from + back.scale(offset);
        if surface.is_walkable_at(candidate) {
            return candidate;
        }
        offset += config.bump_step;
    }

    // No valid tile within budget; may visually clip but never stays put.
    from + back.scale(config.bump_fallback_offset)
}

/// Starts the bump: zeroes the body, knocks the sprite back, flashes the
/// tint, and schedules the recovery/tint timers. The caller is responsible
/// for setting its own bumping flag (and for not calling this again until
/// the [`TimerEvent::BumpRecovered`] for `id` has fired).
pub fn begin(id: &EntityId, sprite: &mut Sprite, travel_dir: Vec2, ctx: &mut FrameCtx<'_>) {
    let _ = sprite.set_velocity(Vec2::ZERO);

    let recovered = recover_position(sprite.position(), travel_dir, ctx.surface, ctx.config);
    debug!(entity = %id, x = recovered.x, y = recovered.y, "invalid move, recovering");
    sprite.set_position(recovered);
    sprite.tint = Some(BUMP_TINT);

    ctx.scheduler.schedule(
        ctx.time_ms + ctx.config.bump_duration_ms,
        TimerEvent::BumpRecovered(id.clone()),
    );
    ctx.scheduler.schedule(
        ctx.time_ms + ctx.config.bump_duration_ms * 0.5,
        TimerEvent::TintClear(id.clone()),
    );
    ctx.events.push(ClientEvent::BumpStarted { entity: id.clone() });
}
