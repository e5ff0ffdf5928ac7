//! Pilot seat: drag gestures become thrust targets.

use super::PointerEvent;
use glam::Vec2;
use net_core::command::ClientCmd;

/// Last recorded drag location. `None` doubles as the "no active drag"
/// sentinel, so a cancel is only ever sent while a drag is live.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    last: Option<Vec2>,
}

impl DragState {
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Map one pointer event through the pilot state machine, appending any
/// resulting commands to `out`.
///
/// A held pointer that has not moved since the last event emits nothing;
/// equality suppression keeps a stationary drag from flooding identical
/// thrust targets every frame.
pub fn handle_pilot_event(state: &mut DragState, ev: &PointerEvent, out: &mut Vec<ClientCmd>) {
    match ev {
        PointerEvent::Down(at) | PointerEvent::Move { at, held: true } => {
            if state.last != Some(at.local) {
                out.push(ClientCmd::ThrustTowards(Some(at.local)));
            }
            state.last = Some(at.local);
        }
        PointerEvent::Move { held: false, .. } => {}
        PointerEvent::Up | PointerEvent::Leave => {
            if state.last.take().is_some() {
                out.push(ClientCmd::ThrustTowards(None));
            }
        }
    }
}
