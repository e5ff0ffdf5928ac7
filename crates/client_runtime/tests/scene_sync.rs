mod support;

use client_runtime::layout::SafeAreaLayout;
use client_runtime::stage::SpriteKind;
use client_runtime::GameScene;
use glam::Vec2;
use net_core::snapshot::PlayerId;
use net_core::transport::LocalConnection;
use support::{snapshot, RecordingStage};

fn scene() -> GameScene<u64> {
    let layout = SafeAreaLayout::new(Vec2::new(800.0, 600.0), Vec2::new(800.0, 600.0));
    GameScene::new(PlayerId(1), layout)
}

#[test]
fn tick_without_snapshot_is_skipped_entirely() {
    let mut scene = scene();
    let conn = LocalConnection::new();
    let mut stage = RecordingStage::default();
    scene.update(&conn, &mut stage);
    assert!(stage.spawned.is_empty());
    assert!(stage.placed.is_empty());
}

#[test]
fn ship_and_turret_spawn_once_then_track_the_snapshot() {
    let mut scene = scene();
    let mut conn = LocalConnection::new();
    let mut stage = RecordingStage::default();

    conn.set_snapshot(snapshot(&[1, 2], &[]));
    scene.update(&conn, &mut stage);
    assert_eq!(stage.spawned_of_kind(SpriteKind::Ship).len(), 1);
    assert_eq!(stage.spawned_of_kind(SpriteKind::Turret).len(), 1);

    // Turret spawns at the ship's position with its own facing.
    let (_, _, turret_pos, turret_angle) = stage.spawned[1];
    assert_eq!(turret_pos, Vec2::new(400.0, 300.0));
    assert!((turret_angle - 1.5).abs() < f32::EPSILON);

    // Ship moves; singletons are updated in place, never recreated.
    let mut moved = snapshot(&[1, 2], &[]);
    moved.player_ship.pos = Vec2::new(500.0, 350.0);
    conn.set_snapshot(moved);
    scene.update(&conn, &mut stage);
    assert_eq!(stage.spawned.len(), 2);

    let ship_handle = stage.spawned_of_kind(SpriteKind::Ship)[0];
    let last_ship_place = stage
        .placed
        .iter()
        .rev()
        .find(|(h, _, _)| *h == ship_handle)
        .copied()
        .unwrap();
    assert_eq!(last_ship_place.1, Vec2::new(500.0, 350.0));
}

#[test]
fn projectiles_spawn_below_the_turret_and_despawn_with_the_snapshot() {
    let mut scene = scene();
    let mut conn = LocalConnection::new();
    let mut stage = RecordingStage::default();

    conn.set_snapshot(snapshot(&[1, 2], &[10, 11]));
    scene.update(&conn, &mut stage);
    let lasers = stage.spawned_of_kind(SpriteKind::Projectile);
    assert_eq!(lasers.len(), 2);

    // Every fresh projectile is layered below the turret.
    let turret_handle = stage.spawned_of_kind(SpriteKind::Turret)[0];
    assert_eq!(stage.layered.len(), 2);
    assert!(stage.layered.iter().all(|(_, r)| *r == turret_handle));

    // One projectile expires server-side.
    conn.set_snapshot(snapshot(&[1, 2], &[11]));
    scene.update(&conn, &mut stage);
    assert_eq!(stage.removed.len(), 1);
    assert!(lasers.contains(&stage.removed[0]));

    // The last one despawns too; no proxies survive an empty set.
    conn.set_snapshot(snapshot(&[1, 2], &[]));
    scene.update(&conn, &mut stage);
    assert_eq!(stage.removed.len(), 2);

    // A quiet tick afterwards removes nothing further.
    scene.update(&conn, &mut stage);
    assert_eq!(stage.removed.len(), 2);
}

#[test]
fn persisting_projectile_is_never_respawned() {
    let mut scene = scene();
    let mut conn = LocalConnection::new();
    let mut stage = RecordingStage::default();

    for _ in 0..4 {
        conn.set_snapshot(snapshot(&[1], &[10]));
        scene.update(&conn, &mut stage);
    }
    assert_eq!(stage.spawned_of_kind(SpriteKind::Projectile).len(), 1);
    assert!(stage.removed.is_empty());
}
