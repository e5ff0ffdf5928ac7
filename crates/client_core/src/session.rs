//! Session identity and seat-role lookup.
//!
//! The roster in each snapshot is ordered; whoever sits at index 0 flies
//! the ship, everyone else runs the turret. A participant missing from the
//! roster (not yet synced) defaults to gunner. That default is a rendering
//! concern, not an authorization boundary; the server validates commands
//! on its own.

use net_core::snapshot::PlayerId;

/// Closed two-seat classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pilot,
    Gunner,
}

impl Role {
    /// Role of `local` given the current roster order.
    #[must_use]
    pub fn of(local: PlayerId, roster: &[PlayerId]) -> Self {
        match roster.iter().position(|p| *p == local) {
            Some(0) => Self::Pilot,
            _ => Self::Gunner,
        }
    }
}

/// Immutable local participant identity. Roles are recomputed from the
/// live roster at every decision point, so a roster reorder (say, the
/// pilot disconnecting) takes effect on the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub local_id: PlayerId,
}

impl Session {
    #[must_use]
    pub fn new(local_id: PlayerId) -> Self {
        Self { local_id }
    }

    #[must_use]
    pub fn role(&self, roster: &[PlayerId]) -> Role {
        Role::of(self.local_id, roster)
    }

    #[must_use]
    pub fn is_pilot(&self, roster: &[PlayerId]) -> bool {
        self.role(roster) == Role::Pilot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seat_is_pilot() {
        let roster = [PlayerId(7), PlayerId(9)];
        assert_eq!(Role::of(PlayerId(7), &roster), Role::Pilot);
        assert_eq!(Role::of(PlayerId(9), &roster), Role::Gunner);
    }

    #[test]
    fn missing_from_roster_defaults_to_gunner() {
        assert_eq!(Role::of(PlayerId(1), &[]), Role::Gunner);
        assert_eq!(Role::of(PlayerId(1), &[PlayerId(2)]), Role::Gunner);
    }

    #[test]
    fn role_follows_roster_reorder() {
        let session = Session::new(PlayerId(9));
        assert!(!session.is_pilot(&[PlayerId(7), PlayerId(9)]));
        // Pilot disconnects; the remaining player takes the front seat.
        assert!(session.is_pilot(&[PlayerId(9)]));
    }
}
