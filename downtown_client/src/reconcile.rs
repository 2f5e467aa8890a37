//! Server reconciliation.
//!
//! Non-possessed entities never run local prediction; their rendered pose
//! advances only here, when a new authoritative record arrives. Position
//! is lerped over the expected snapshot window and heading turns toward
//! the target at a fixed angular rate along the shorter arc.

use downtown_shared::math::rotate_toward;
use downtown_shared::render::Sprite;
use downtown_shared::state::EntityStateRecord;
use tracing::debug;

/// Interpolation factor for one reconciliation step. Saturates at 1, so a
/// record older than one full window snaps exactly to the target.
pub fn lerp_factor(elapsed_ms: f32, interval_ms: f32) -> f32 {
    if interval_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / interval_ms).min(1.0)
}

/// Applies one reconciliation step to a remote entity's sprite.
///
/// `last_update_ms` is the stamp of the previous record; `None` means this
/// is the first record ever seen and the pose snaps outright.
pub fn apply_remote_update(
    sprite: &mut Sprite,
    record: &EntityStateRecord,
    last_update_ms: Option<f32>,
    time_ms: f32,
    delta_ms: f32,
    rotation_speed: f32,
    interval_ms: f32,
) {
    let factor = match last_update_ms {
        Some(last) => lerp_factor(time_ms - last, interval_ms),
        None => 1.0,
    };

    let next = sprite.position().lerp(record.position(), factor);
    sprite.set_position(next);

    let max_step = rotation_speed * delta_ms / 1000.0;
    sprite.rotation = rotate_toward(sprite.rotation, record.rotation, max_step);

    if let Some(animation) = record.animation.as_deref() {
        sprite.play_animation(animation);
    }
}

/// Bookkeeping path for records about an entity the local player drives:
/// the pose is never touched, but a divergence from local prediction is
/// worth a debug line.
pub fn note_local_divergence(sprite: &Sprite, record: &EntityStateRecord) {
    let drift = sprite.position().distance(record.position());
    if drift > 1.0 {
        debug!(
            entity = %record.id,
            drift,
            "server disagrees with local prediction; keeping local pose"
        );
    }
}
