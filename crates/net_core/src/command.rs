//! Client->server intent commands.
//!
//! This is the whole outbound surface: one join call at session start, a
//! thrust target (or its cancellation) from the pilot seat, and a turret
//! swing state from the gunner seat.

use glam::Vec2;

/// Desired turret motion, held server-side until replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurretState {
    MoveLeft,
    MoveRight,
    Idle,
}

/// An outbound intent message.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientCmd {
    /// One-time session initialization.
    Join,
    /// Steer the ship toward a point in the play area; `None` cancels the
    /// current target.
    ThrustTowards(Option<Vec2>),
    SetTurretState(TurretState),
}
