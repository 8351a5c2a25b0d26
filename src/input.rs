//! Per-frame pointer snapshot.
//!
//! DOM listeners feed raw events into a [`PointerTracker`]; once per animation
//! frame the game takes a [`PointerState`] which answers "just pressed" and
//! "just released" for that frame only.

use crate::geometry::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    /// Primary button currently held.
    pub down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl PointerState {
    pub fn pressed(pos: Vec2) -> Self {
        Self {
            pos,
            down: true,
            just_pressed: true,
            just_released: false,
        }
    }

    pub fn released(pos: Vec2) -> Self {
        Self {
            pos,
            down: false,
            just_pressed: false,
            just_released: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    pos: Vec2,
    down: bool,
    pressed_since_frame: bool,
    released_since_frame: bool,
}

impl PointerTracker {
    pub fn on_move(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn on_down(&mut self, pos: Vec2) {
        self.pos = pos;
        self.down = true;
        self.pressed_since_frame = true;
    }

    pub fn on_up(&mut self, pos: Vec2) {
        self.pos = pos;
        self.down = false;
        self.released_since_frame = true;
    }

    /// Pointer left the surface: treat a held button as released so buttons
    /// do not stay stuck down.
    pub fn on_leave(&mut self) {
        if self.down {
            self.down = false;
            self.released_since_frame = true;
        }
        self.pos = Vec2::new(-1.0, -1.0);
    }

    /// Snapshot for this frame and clear the edge flags.
    pub fn take_frame(&mut self) -> PointerState {
        let state = PointerState {
            pos: self.pos,
            down: self.down,
            just_pressed: self.pressed_since_frame,
            just_released: self.released_since_frame,
        };
        self.pressed_since_frame = false;
        self.released_since_frame = false;
        state
    }
}
