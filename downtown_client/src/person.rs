//! Walking character.
//!
//! Pedestrians move at a fixed speed on both axes with no acceleration
//! curve. The walk/idle animation flips only on transition, never
//! reasserted while already playing.

use downtown_shared::config::ClientConfig;
use downtown_shared::math::Vec2;
use downtown_shared::render::Sprite;
use downtown_shared::state::{EntityDetails, EntityId, EntityStateRecord, PoseReport, UserId};
use tracing::debug;

use crate::bump;
use crate::frame::FrameCtx;
use crate::input::InputSample;
use crate::reconcile;

/// Angular rate used when reconciling a remote pedestrian's heading.
const ROTATION_SPEED: f32 = 6.0;

pub struct Person {
    id: EntityId,
    user_id: UserId,
    pub sprite: Sprite,
    state: Option<EntityStateRecord>,
    speed: f32,
    last_server_update_ms: Option<f32>,
    is_bumping: bool,
    possessed: bool,
}

impl Person {
    /// The local player's avatar, created at scene setup before any server
    /// record exists for it.
    pub fn new_local(id: EntityId, user_id: UserId, x: f32, y: f32, speed: f32) -> Self {
        Self {
            id,
            user_id,
            sprite: Sprite::new(x, y, "person"),
            state: None,
            speed,
            last_server_update_ms: None,
            is_bumping: false,
            possessed: false,
        }
    }

    /// A pedestrian first seen in a snapshot. Returns `None` for a record
    /// of a different kind.
    pub fn from_record(record: EntityStateRecord, speed: f32, time_ms: f32) -> Option<Self> {
        let EntityDetails::Person(details) = &record.details else {
            return None;
        };
        let user_id = details.user_id.clone();

        let mut sprite = Sprite::new(record.x, record.y, "person");
        sprite.rotation = record.rotation;

        Some(Self {
            id: record.id.clone(),
            user_id,
            sprite,
            state: Some(record),
            speed,
            last_server_update_ms: Some(time_ms),
            is_bumping: false,
            possessed: false,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn state(&self) -> Option<&EntityStateRecord> {
        self.state.as_ref()
    }

    pub fn is_bumping(&self) -> bool {
        self.is_bumping
    }

    pub fn set_bumping(&mut self, bumping: bool) {
        self.is_bumping = bumping;
    }

    /// Only the owning user can act on a pedestrian.
    pub fn is_actionable(&self, user: &UserId) -> bool {
        *user == self.user_id
    }

    pub fn is_possessed(&self) -> bool {
        self.possessed
    }

    pub fn take_control(&mut self) {
        self.possessed = true;
        self.sprite.visible = true;
    }

    /// Hides the avatar while the player embodies something else.
    pub fn remove_control(&mut self) {
        self.possessed = false;
        self.sprite.visible = false;
        let _ = self.sprite.set_velocity(Vec2::ZERO);
        self.sprite.play_animation("idle");
    }

    pub fn update_input(&mut self, input: &InputSample, ctx: &mut FrameCtx<'_>) {
        if self.is_bumping {
            return;
        }
        if self.sprite.body.is_none() {
            debug!(entity = %self.id, "physics body not ready, skipping update");
            return;
        }

        let mut velocity = Vec2::ZERO;
        if input.up {
            velocity.y = -self.speed;
        } else if input.down {
            velocity.y = self.speed;
        }
        if input.left {
            velocity.x = -self.speed;
        } else if input.right {
            velocity.x = self.speed;
        }

        if velocity != Vec2::ZERO {
            self.sprite.play_animation("walk");
        } else {
            self.sprite.play_animation("idle");
        }

        let candidate = self.sprite.position() + velocity.scale(ctx.dt());
        if velocity != Vec2::ZERO && !ctx.surface.is_walkable_at(candidate) {
            self.is_bumping = true;
            bump::begin(&self.id, &mut self.sprite, velocity, ctx);
            return;
        }

        self.sprite.set_position(candidate);
        let _ = self.sprite.set_velocity(velocity);
    }

    pub fn update_from_server(
        &mut self,
        record: EntityStateRecord,
        time_ms: f32,
        delta_ms: f32,
        local_user: &UserId,
        config: &ClientConfig,
    ) {
        let locally_driven =
            self.possessed || record.details.driven_by() == Some(local_user);

        if locally_driven {
            reconcile::note_local_divergence(&self.sprite, &record);
        } else {
            reconcile::apply_remote_update(
                &mut self.sprite,
                &record,
                self.last_server_update_ms,
                time_ms,
                delta_ms,
                ROTATION_SPEED,
                config.snapshot_interval_ms,
            );
        }

        self.state = Some(record);
        self.last_server_update_ms = Some(time_ms);
    }

    pub fn pose_report(&self) -> PoseReport {
        PoseReport::from_pose(
            self.sprite.x,
            self.sprite.y,
            self.sprite.rotation,
            !self.sprite.visible,
            self.sprite.animation.clone(),
        )
    }
}
