//! Drivable vehicle.
//!
//! Cars use an acceleration-based speed model rather than instantaneous
//! velocity: forward input builds `current_speed` toward the server-given
//! max, braking and coasting bleed it back toward zero, and steering
//! authority shrinks linearly with speed so a car at full tilt cannot
//! snap-turn. Heading is raw, unnormalized radians; the trig is periodic
//! so no wrapping is needed.

use std::f32::consts::FRAC_PI_2;

use downtown_shared::config::ClientConfig;
use downtown_shared::math::Vec2;
use downtown_shared::render::Sprite;
use downtown_shared::state::{EntityDetails, EntityId, EntityStateRecord, PoseReport, UserId};
use tracing::debug;

use crate::bump;
use crate::frame::FrameCtx;
use crate::input::InputSample;
use crate::reconcile;

pub struct Car {
    id: EntityId,
    pub sprite: Sprite,
    state: EntityStateRecord,
    max_speed: f32,
    acceleration: f32,
    rotation_speed: f32,
    current_speed: f32,
    last_server_update_ms: Option<f32>,
    is_bumping: bool,
    driven_locally: bool,
}

impl Car {
    /// Builds a car from its first snapshot record. Returns `None` for a
    /// record of a different kind.
    pub fn from_record(record: EntityStateRecord, time_ms: f32) -> Option<Self> {
        let EntityDetails::Car(details) = &record.details else {
            return None;
        };
        let (max_speed, acceleration, rotation_speed) =
            (details.max_speed, details.acceleration, details.rotation_speed);

        let mut sprite = Sprite::new(record.x, record.y, "car-north");
        sprite.rotation = record.rotation;

        Some(Self {
            id: record.id.clone(),
            sprite,
            state: record,
            max_speed,
            acceleration,
            rotation_speed,
            current_speed: 0.0,
            last_server_update_ms: Some(time_ms),
            is_bumping: false,
            driven_locally: false,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn state(&self) -> &EntityStateRecord {
        &self.state
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn is_stopped(&self) -> bool {
        self.current_speed == 0.0
    }

    pub fn is_bumping(&self) -> bool {
        self.is_bumping
    }

    pub fn set_bumping(&mut self, bumping: bool) {
        self.is_bumping = bumping;
    }

    /// Anyone in range can act on a car.
    pub fn is_actionable(&self, _user: &UserId) -> bool {
        true
    }

    pub fn is_possessed(&self) -> bool {
        self.driven_locally
    }

    pub fn take_control(&mut self) {
        self.driven_locally = true;
    }

    pub fn remove_control(&mut self) {
        self.driven_locally = false;
        self.current_speed = 0.0;
        let _ = self.sprite.set_velocity(Vec2::ZERO);
    }

    /// Steering authority at the current speed: full rotation rate at
    /// rest, `min_rotation_factor` of it at max speed, linear in between.
    fn rotation_authority(&self, config: &ClientConfig) -> f32 {
        let ratio = if self.max_speed > 0.0 {
            (self.current_speed / self.max_speed).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.rotation_speed * (1.0 - (1.0 - config.min_rotation_factor) * ratio)
    }

    /// Local prediction for the possessed car. Runs only while this car is
    /// the controlled entity.
    pub fn update_input(&mut self, input: &InputSample, ctx: &mut FrameCtx<'_>) {
        if self.is_bumping {
            // Recovery in progress; input is locked out until the timer fires.
            return;
        }
        if self.sprite.body.is_none() {
            debug!(entity = %self.id, "physics body not ready, skipping update");
            return;
        }

        let dt = ctx.dt();

        let authority = self.rotation_authority(ctx.config);
        if input.left {
            self.sprite.rotation -= authority * dt;
        } else if input.right {
            self.sprite.rotation += authority * dt;
        }

        if input.up {
            self.current_speed = (self.current_speed + self.acceleration * dt).min(self.max_speed);
            self.sprite.set_texture("car-north");
        } else if input.down {
            self.current_speed = (self.current_speed - ctx.config.braking * dt).max(0.0);
            self.sprite.set_texture("car-south");
        } else {
            self.current_speed = (self.current_speed - ctx.config.deceleration * dt).max(0.0);
        }

        // Sprite faces up at rotation 0, so travel is rotated back a quarter turn.
        let direction = self.sprite.rotation - FRAC_PI_2;
        let velocity = Vec2::from_angle(direction).scale(self.current_speed);
        let candidate = self.sprite.position() + velocity.scale(dt);

        if self.current_speed > 0.0 && !ctx.surface.is_walkable_at(candidate) {
            self.current_speed = 0.0;
            self.is_bumping = true;
            bump::begin(&self.id, &mut self.sprite, velocity, ctx);
            return;
        }

        self.sprite.set_position(candidate);
        let _ = self.sprite.set_velocity(velocity);
    }

    /// Consumes a fresh server record. Locally driven cars keep their
    /// predicted pose; everything else reconciles toward the record.
    pub fn update_from_server(
        &mut self,
        record: EntityStateRecord,
        time_ms: f32,
        delta_ms: f32,
        local_user: &UserId,
        config: &ClientConfig,
    ) {
        let locally_driven =
            self.driven_locally || record.details.driven_by() == Some(local_user);

        if locally_driven {
            reconcile::note_local_divergence(&self.sprite, &record);
        } else {
            reconcile::apply_remote_update(
                &mut self.sprite,
                &record,
                self.last_server_update_ms,
                time_ms,
                delta_ms,
                self.rotation_speed,
                config.snapshot_interval_ms,
            );
        }

        if let EntityDetails::Car(details) = &record.details {
            self.max_speed = details.max_speed;
            self.acceleration = details.acceleration;
            self.rotation_speed = details.rotation_speed;
        }
        self.state = record;
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
