//! Role-gated pointer routing.

use super::{gunner, pilot, PointerEvent};
use crate::session::Role;
use net_core::command::ClientCmd;
use tracing::debug;

/// Owns the transient input state (the pilot drag location) and dispatches
/// each event through exactly one seat handler. The caller decides the
/// role per event from the live roster, so a mid-session roster change is
/// picked up without any invalidation hook.
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: pilot::DragState,
}

impl InputRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag.dragging()
    }

    /// Route one event, appending any resulting commands to `out`.
    pub fn route(
        &mut self,
        role: Role,
        viewport_width: f32,
        ev: &PointerEvent,
        out: &mut Vec<ClientCmd>,
    ) {
        let before = out.len();
        match role {
            Role::Pilot => pilot::handle_pilot_event(&mut self.drag, ev, out),
            Role::Gunner => gunner::handle_gunner_event(viewport_width, ev, out),
        }
        if out.len() > before {
            debug!(target: "input", ?role, queued = out.len() - before, "pointer event mapped to intent");
        }
    }
}
