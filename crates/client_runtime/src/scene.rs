//! Scene state: owns the visual proxies and drives sync + input routing.
//!
//! Two external clocks drive this type, never concurrently: the render
//! tick calls `update` once per frame, and the host's input stream calls
//! the `pointer_*` entry points as events arrive.

use std::collections::HashMap;

use client_core::reconcile::{reconcile, sync_singleton, ProxyOps};
use client_core::session::{Role, Session};
use client_core::systems::router::InputRouter;
use client_core::systems::{PointerEvent, PointerSample};
use glam::Vec2;
use net_core::command::ClientCmd;
use net_core::snapshot::{PlayerId, ProjectileId, ProjectileRep};
use net_core::transport::Connection;
use tracing::{trace, warn};

use crate::layout::SafeAreaLayout;
use crate::stage::{SpriteKind, Stage};

/// Spawns and places one fixed sprite kind on a stage.
struct SpriteOps<'a, S: Stage> {
    stage: &'a mut S,
    kind: SpriteKind,
}

impl<S: Stage> ProxyOps<(Vec2, f32)> for SpriteOps<'_, S> {
    type Proxy = S::Visual;

    fn create(&mut self, pose: &(Vec2, f32)) -> S::Visual {
        self.stage.spawn(self.kind, pose.0, pose.1)
    }
    fn update(&mut self, visual: &mut S::Visual, pose: &(Vec2, f32)) {
        self.stage.place(visual, pose.0, pose.1);
    }
    fn remove(&mut self, visual: S::Visual) {
        self.stage.remove(visual);
    }
}

/// Projectile proxies additionally slot in underneath the turret when
/// they first appear, so lasers draw below the barrel.
struct ProjectileOps<'a, S: Stage> {
    stage: &'a mut S,
    turret: Option<&'a S::Visual>,
}

impl<S: Stage> ProxyOps<ProjectileRep> for ProjectileOps<'_, S> {
    type Proxy = S::Visual;

    fn create(&mut self, p: &ProjectileRep) -> S::Visual {
        let mut visual = self.stage.spawn(SpriteKind::Projectile, p.pos, p.angle);
        if let Some(turret) = self.turret {
            self.stage.layer_below(&mut visual, turret);
        }
        visual
    }
    fn update(&mut self, visual: &mut S::Visual, p: &ProjectileRep) {
        self.stage.place(visual, p.pos, p.angle);
    }
    fn remove(&mut self, visual: S::Visual) {
        self.stage.remove(visual);
    }
}

pub struct GameScene<V> {
    session: Session,
    layout: SafeAreaLayout,
    router: InputRouter,
    ship: Option<V>,
    turret: Option<V>,
    projectiles: HashMap<ProjectileId, V>,
}

impl<V> GameScene<V> {
    #[must_use]
    pub fn new(local_id: PlayerId, layout: SafeAreaLayout) -> Self {
        Self {
            session: Session::new(local_id),
            layout,
            router: InputRouter::new(),
            ship: None,
            turret: None,
            projectiles: HashMap::new(),
        }
    }

    /// One-time session initialization.
    pub fn join<C: Connection>(&self, conn: &mut C) {
        if let Err(err) = conn.send(ClientCmd::Join) {
            warn!(target: "scene", err = %err, "join failed");
        }
    }

    /// The host resized; recenter the safe area.
    pub fn resized(&mut self, viewport: Vec2) {
        self.layout.resize(viewport);
    }

    pub fn pointer_down<C: Connection>(&mut self, conn: &mut C, screen: Vec2) {
        let ev = PointerEvent::Down(self.sample(screen));
        self.route(conn, &ev);
    }

    pub fn pointer_move<C: Connection>(&mut self, conn: &mut C, screen: Vec2, held: bool) {
        let ev = PointerEvent::Move {
            at: self.sample(screen),
            held,
        };
        self.route(conn, &ev);
    }

    pub fn pointer_up<C: Connection>(&mut self, conn: &mut C) {
        self.route(conn, &PointerEvent::Up);
    }

    /// Pointer left the playable area.
    pub fn pointer_left<C: Connection>(&mut self, conn: &mut C) {
        self.route(conn, &PointerEvent::Leave);
    }

    /// Per-frame sync against the latest snapshot. Without a snapshot the
    /// whole tick is skipped; that is the normal state during startup.
    pub fn update<C, S>(&mut self, conn: &C, stage: &mut S)
    where
        C: Connection,
        S: Stage<Visual = V>,
    {
        let Some(snap) = conn.snapshot() else {
            trace!(target: "scene", "no snapshot yet; skipping tick");
            return;
        };

        let ship = snap.player_ship;
        sync_singleton(
            &mut self.ship,
            &(ship.pos, ship.angle),
            &mut SpriteOps {
                stage: &mut *stage,
                kind: SpriteKind::Ship,
            },
        );
        // The turret rides the ship's position with its own facing.
        sync_singleton(
            &mut self.turret,
            &(ship.pos, snap.turret.angle),
            &mut SpriteOps {
                stage: &mut *stage,
                kind: SpriteKind::Turret,
            },
        );

        let latest = snap.projectiles_by_id();
        let mut ops = ProjectileOps {
            stage,
            turret: self.turret.as_ref(),
        };
        reconcile(&mut self.projectiles, &latest, &mut ops);
    }

    fn sample(&self, screen: Vec2) -> PointerSample {
        PointerSample {
            screen,
            local: self.layout.to_local(screen),
        }
    }

    fn route<C: Connection>(&mut self, conn: &mut C, ev: &PointerEvent) {
        // Conservative re-lookup: the roster can reorder between events.
        let role = conn
            .snapshot()
            .map_or(Role::Gunner, |snap| self.session.role(&snap.players));
        if role == Role::Gunner
            && self.turret.is_none()
            && matches!(ev, PointerEvent::Down(_))
        {
            // No turret on screen yet, nothing to aim.
            return;
        }
        let mut out = Vec::new();
        self.router
            .route(role, self.layout.viewport_width(), ev, &mut out);
        for cmd in out {
            if let Err(err) = conn.send(cmd) {
                warn!(target: "scene", err = %err, ?role, "dropping intent; send failed");
            }
        }
    }
}
