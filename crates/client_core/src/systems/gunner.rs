//! Gunner seat: screen halves map to turret swing direction.
//!
//! Stateless per event. Pointer-move and leave are deliberately unhandled;
//! turret direction is discrete, not continuous.

use super::PointerEvent;
use net_core::command::{ClientCmd, TurretState};

/// Map one pointer event to a turret command, appending to `out`.
///
/// Pointer-down partitions the viewport at its horizontal midpoint; the
/// boundary itself is right-inclusive. Pointer-up always sends `Idle`
/// (a terminal reset, so no de-duplication is needed).
pub fn handle_gunner_event(viewport_width: f32, ev: &PointerEvent, out: &mut Vec<ClientCmd>) {
    match ev {
        PointerEvent::Down(at) => {
            let middle = viewport_width * 0.5;
            let state = if at.screen.x < middle {
                TurretState::MoveLeft
            } else {
                TurretState::MoveRight
            };
            out.push(ClientCmd::SetTurretState(state));
        }
        PointerEvent::Up => out.push(ClientCmd::SetTurretState(TurretState::Idle)),
        PointerEvent::Move { .. } | PointerEvent::Leave => {}
    }
}
