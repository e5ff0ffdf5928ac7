//! Per-tick world snapshot types received from the authoritative server.
//!
//! The transport delivers these ordered and deduplicated; everything here is
//! treated as read-only truth by the client. Roster order matters: index 0
//! is the pilot seat for the match.

use glam::Vec2;
use std::collections::HashMap;

/// Stable participant identity, assigned by the server at join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

/// Stable projectile identity; unique for the projectile's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileId(pub u64);

/// The single player ship shared by the crew.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipRep {
    pub pos: Vec2,
    /// Facing angle in radians.
    pub angle: f32,
}

/// The ship-mounted turret. Attached to the ship by convention, so it
/// carries no position of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurretRep {
    /// Facing angle in radians.
    pub angle: f32,
}

/// One live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileRep {
    pub id: ProjectileId,
    pub pos: Vec2,
    /// Facing angle in radians.
    pub angle: f32,
}

/// Everything the server says about the world at one tick.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    /// Connected participants in seat order; index 0 is the pilot.
    pub players: Vec<PlayerId>,
    pub player_ship: ShipRep,
    pub turret: TurretRep,
    pub projectiles: Vec<ProjectileRep>,
}

impl WorldSnapshot {
    /// Projectiles keyed by identity, the shape reconciliation wants.
    #[must_use]
    pub fn projectiles_by_id(&self) -> HashMap<ProjectileId, ProjectileRep> {
        self.projectiles.iter().map(|p| (p.id, *p)).collect()
    }
}
