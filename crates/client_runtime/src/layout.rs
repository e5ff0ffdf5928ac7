//! Safe-area layout: centers the fixed-size play area in the viewport and
//! maps raw pointer coordinates into it.
//!
//! Server coordinates live in the safe-area frame, so every pilot thrust
//! target has to pass through `to_local` before it is compared or sent.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeAreaLayout {
    safe: Vec2,
    viewport: Vec2,
    origin: Vec2,
}

impl SafeAreaLayout {
    #[must_use]
    pub fn new(safe: Vec2, viewport: Vec2) -> Self {
        let mut layout = Self {
            safe,
            viewport,
            origin: Vec2::ZERO,
        };
        layout.resize(viewport);
        layout
    }

    /// Recompute the centered origin for a new viewport size.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.origin = (viewport - self.safe) * 0.5;
    }

    /// Map a raw viewport position into the safe-area frame.
    #[must_use]
    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport.x
    }

    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}
