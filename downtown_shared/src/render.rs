//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend. `Sprite`
//! is the headless stand-in for the host engine's renderable handle: the
//! core mutates it and a real renderer mirrors it each frame.

use crate::math::Vec2;

/// Physics body attached to a sprite. `None` until the host engine has
/// initialized it; updates that need a body abort early and retry next
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub velocity: Vec2,
}

/// A renderable handle: pose, visibility, current animation, tint, and an
/// optional physics body. Owned exclusively by one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub visible: bool,
    pub texture: String,
    pub animation: Option<String>,
    pub tint: Option<u32>,
    pub body: Option<Body>,
}

impl Sprite {
    pub fn new(x: f32, y: f32, texture: impl Into<String>) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            visible: true,
            texture: texture.into(),
            animation: None,
            tint: None,
            body: Some(Body::default()),
        }
    }

    /// A sprite whose physics body has not been initialized yet.
    pub fn without_body(x: f32, y: f32, texture: impl Into<String>) -> Self {
        Self {
            body: None,
            ..Self::new(x, y, texture)
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Sets body velocity. Returns `false` (no mutation) when the body is
    /// not initialized.
    pub fn set_velocity(&mut self, velocity: Vec2) -> bool {
        match self.body.as_mut() {
            Some(body) => {
                body.velocity = velocity;
                true
            }
            None => false,
        }
    }

    pub fn set_texture(&mut self, texture: impl Into<String>) {
        self.texture = texture.into();
    }

    /// Switches animation only on transition, never reasserting the
    /// current one.
    pub fn play_animation(&mut self, key: &str) {
        if self.animation.as_deref() != Some(key) {
            self.animation = Some(key.to_string());
        }
    }
}
