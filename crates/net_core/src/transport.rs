//! Connection boundary between the sync core and the transport layer.
//!
//! Implementations:
//! - `LocalConnection`: in-proc stand-in for tests and local demos
//! - (elsewhere) a real socket-backed connection owned by the transport layer
//!
//! The read side is "latest snapshot wins": the transport keeps exactly one
//! current `WorldSnapshot` and the core polls it once per render tick.

use crate::command::ClientCmd;
use crate::snapshot::WorldSnapshot;

/// What the sync core needs from a session: the current authoritative
/// snapshot (if any has arrived yet) and a way to send intent commands.
pub trait Connection {
    /// Latest authoritative snapshot, or `None` before the first one lands.
    fn snapshot(&self) -> Option<&WorldSnapshot>;
    fn send(&mut self, cmd: ClientCmd) -> anyhow::Result<()>;
}

/// In-memory connection holding a settable snapshot and recording every
/// command sent through it.
#[derive(Debug, Default)]
pub struct LocalConnection {
    snapshot: Option<WorldSnapshot>,
    pub sent: Vec<ClientCmd>,
}

impl LocalConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&mut self, snap: WorldSnapshot) {
        self.snapshot = Some(snap);
    }

    /// Drop the current snapshot, as during session startup.
    pub fn clear_snapshot(&mut self) {
        self.snapshot = None;
    }
}

impl Connection for LocalConnection {
    fn snapshot(&self) -> Option<&WorldSnapshot> {
        self.snapshot.as_ref()
    }

    fn send(&mut self, cmd: ClientCmd) -> anyhow::Result<()> {
        self.sent.push(cmd);
        Ok(())
    }
}
