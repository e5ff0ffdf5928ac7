#![allow(dead_code)]

use client_runtime::stage::{SpriteKind, Stage};
use glam::Vec2;
use net_core::snapshot::{
    PlayerId, ProjectileId, ProjectileRep, ShipRep, TurretRep, WorldSnapshot,
};

/// In-memory stage handing out integer handles and recording every call.
#[derive(Default)]
pub struct RecordingStage {
    next_handle: u64,
    pub spawned: Vec<(u64, SpriteKind, Vec2, f32)>,
    pub placed: Vec<(u64, Vec2, f32)>,
    pub removed: Vec<u64>,
    /// (moved visual, reference it was layered below)
    pub layered: Vec<(u64, u64)>,
}

impl RecordingStage {
    pub fn spawned_of_kind(&self, kind: SpriteKind) -> Vec<u64> {
        self.spawned
            .iter()
            .filter(|(_, k, _, _)| *k == kind)
            .map(|(h, _, _, _)| *h)
            .collect()
    }
}

impl Stage for RecordingStage {
    type Visual = u64;

    fn spawn(&mut self, kind: SpriteKind, pos: Vec2, angle: f32) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.spawned.push((handle, kind, pos, angle));
        handle
    }

    fn place(&mut self, visual: &mut u64, pos: Vec2, angle: f32) {
        self.placed.push((*visual, pos, angle));
    }

    fn remove(&mut self, visual: u64) {
        self.removed.push(visual);
    }

    fn layer_below(&mut self, visual: &mut u64, reference: &u64) {
        self.layered.push((*visual, *reference));
    }
}

pub fn roster(ids: &[u64]) -> Vec<PlayerId> {
    ids.iter().copied().map(PlayerId).collect()
}

pub fn snapshot(players: &[u64], projectile_ids: &[u64]) -> WorldSnapshot {
    WorldSnapshot {
        players: roster(players),
        player_ship: ShipRep {
            pos: Vec2::new(400.0, 300.0),
            angle: 0.25,
        },
        turret: TurretRep { angle: 1.5 },
        projectiles: projectile_ids
            .iter()
            .map(|id| ProjectileRep {
                id: ProjectileId(*id),
                pos: Vec2::new(*id as f32, 0.0),
                angle: 0.0,
            })
            .collect(),
    }
}
