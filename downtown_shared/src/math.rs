//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! It avoids SIMD/unsafe and focuses on stable semantics.

use serde::{Deserialize, Serialize};

/// 2D vector in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    pub fn distance(self, to: Self) -> f32 {
        Self::new(to.x - self.x, to.y - self.y).len()
    }

    /// Unit vector pointing along `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn scale(self, by: f32) -> Self {
        Self::new(self.x * by, self.y * by)
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Wraps an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Signed smallest rotation from `from` to `to`.
pub fn shortest_angle_diff(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Moves `current` toward `target` by at most `max_step` radians, taking
/// the shorter angular path. Headings stay raw (unnormalized) so repeated
/// calls never introduce wrap jumps on the caller's side.
pub fn rotate_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = shortest_angle_diff(current, target);
    if diff.abs() <= max_step {
        current + diff
    } else {
        current + max_step.copysign(diff)
    }
}

/// Rounds to three decimal places, the precision used for reported headings.
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
