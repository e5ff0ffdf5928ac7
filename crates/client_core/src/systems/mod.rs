//! Pointer-to-intent systems.
//!
//! Lightweight, testable logic fed by the renderer host's pointer events.
//! Pilot and gunner handlers are pure over their own state; the router
//! picks exactly one per event based on the seat role.

pub mod gunner;
pub mod pilot;
pub mod router;

use glam::Vec2;

/// A pointer position in both frames of interest: the raw viewport frame
/// (gunner midpoint test) and the safe-area local frame (pilot thrust
/// target). The owning context applies the layout transform before
/// routing; handlers never convert coordinates themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub screen: Vec2,
    pub local: Vec2,
}

/// Raw gesture signals from the host. `Leave` fires when the pointer
/// exits the playable area (loss of focus).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move { at: PointerSample, held: bool },
    Up,
    Leave,
}
