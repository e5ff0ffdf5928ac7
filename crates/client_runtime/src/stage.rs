//! Renderer boundary: the proxy primitives the scene needs.

use glam::Vec2;

/// Which art a spawned visual carries. The stage picks textures, scale,
/// and origin; the scene only cares about identity and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Turret,
    Projectile,
}

/// What the rendering collaborator provides: create, move, and destroy
/// visuals, plus one draw-order primitive so fresh projectiles can slot
/// in underneath the turret.
pub trait Stage {
    type Visual;

    fn spawn(&mut self, kind: SpriteKind, pos: Vec2, angle: f32) -> Self::Visual;
    fn place(&mut self, visual: &mut Self::Visual, pos: Vec2, angle: f32);
    fn remove(&mut self, visual: Self::Visual);
    /// Move `visual` directly below `reference` in draw order.
    fn layer_below(&mut self, visual: &mut Self::Visual, reference: &Self::Visual);
}
