//! Input handling.
//!
//! In the real client this is sampled from the host engine's cursor keys
//! once per frame. The core only ever sees this snapshot; key bindings and
//! repeat behavior stay on the engine side.

/// Directional input state at a moment in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSample {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn forward() -> Self {
        Self {
            up: true,
            ..Self::NONE
        }
    }

    pub fn reverse() -> Self {
        Self {
            down: true,
            ..Self::NONE
        }
    }

    pub fn idle(self) -> bool {
        !self.up && !self.down && !self.left && !self.right
    }
}
