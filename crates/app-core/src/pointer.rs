//! Attractor position and press state, written by the platform input
//! collaborators and read once per frame by the particle update.

use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            pressed: false,
        }
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Returns `true` only on the released→pressed transition, so a held
    /// press bursts exactly once.
    pub fn press_start(&mut self, x: f32, y: f32) -> bool {
        self.position = Vec2::new(x, y);
        !std::mem::replace(&mut self.pressed, true)
    }

    pub fn press_end(&mut self) {
        self.pressed = false;
    }

    /// Position as an attraction target; `None` when the platform fed us a
    /// non-finite coordinate, which means no attraction this frame.
    #[inline]
    pub fn attractor(&self) -> Option<Vec2> {
        self.position.is_finite().then_some(self.position)
    }
}
