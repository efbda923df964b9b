//! Behavioural properties of the simulation, driven through `World`.

use bonk_arena::core::{EnemyId, World, WorldConfig};
use bonk_arena::types::*;
use glam::Vec2;

fn empty_world() -> World {
    World::new(WorldConfig::empty(9))
}

#[test]
fn player_stays_inside_room_for_any_dt() {
    let mut world = empty_world();
    let intents = [
        (1.0, 0.0),
        (-1.0, 0.0),
        (0.0, 1.0),
        (0.0, -1.0),
        (0.7, 0.7),
        (-5.0, 3.0),
    ];
    let dts = [0.0, 0.001, 0.016, 0.1, 1.0, 10.0, 1_000.0];

    let mut now = 0.0;
    for &(x, y) in &intents {
        for &dt in &dts {
            now += 16.0;
            world.tick(dt, now, &InputFrame::moving(x, y));
            let p = world.player();
            assert!(p.pos.x >= p.radius && p.pos.x <= ROOM_WIDTH - p.radius, "{:?}", p.pos);
            assert!(p.pos.y >= p.radius && p.pos.y <= ROOM_HEIGHT - p.radius, "{:?}", p.pos);
        }
    }
}

#[test]
fn bonk_hits_in_front_but_not_to_the_side() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.set_player_facing(Vec2::X);

    let ahead = world
        .spawn_enemy_at(origin + Vec2::new(BONK_REACH - 1.0, 0.0))
        .unwrap();
    let side = world
        .spawn_enemy_at(origin + Vec2::new(0.0, BONK_REACH - 1.0))
        .unwrap();

    assert!(world.request_bonk());
    let out = world.resolve_hits(0.0);
    assert_eq!(out.hits, 1);

    let hp = |id: EnemyId| world.enemies().iter().find(|e| e.id == id).unwrap().hp;
    assert_eq!(hp(ahead), ENEMY_HP - BONK_DAMAGE);
    assert_eq!(hp(side), ENEMY_HP);
    assert!(world.bonk().struck().contains(ahead));
    assert!(!world.bonk().struck().contains(side));
}

#[test]
fn enemy_is_struck_once_per_swing() {
    let mut world = empty_world();
    let origin = world.player().pos;
    let id = world.spawn_enemy_at(origin + Vec2::new(20.0, 0.0)).unwrap();

    world.request_bonk();
    let mut total = 0;
    for _ in 0..10 {
        total += world.resolve_hits(0.0).hits;
    }
    assert_eq!(total, 1);
    assert_eq!(world.enemies()[0].hp, ENEMY_HP - BONK_DAMAGE);

    // Frames inside the same active window do not strike again either.
    let mut now = 0.0;
    for _ in 0..5 {
        now += 16.0;
        let report = world.tick(0.0, now, &InputFrame::idle());
        assert_eq!(report.hits, 0);
    }
    assert_eq!(world.bonk().struck().len(), 1);
    assert!(world.bonk().struck().contains(id));
}

#[test]
fn defeated_enemy_drops_exactly_one_orb_near_its_position() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.spawn_enemy_at(origin + Vec2::new(40.0, 0.0));

    let end_swing = BONK_DURATION + 0.01;
    let mut now = 0.0;
    for _ in 0..(ENEMY_HP / BONK_DAMAGE - 1) {
        world.request_bonk();
        assert_eq!(world.resolve_hits(now).hits, 1);
        now += 200.0;
        world.tick(end_swing, now, &InputFrame::idle());
        assert!(!world.bonk().is_active());
    }

    let last_pos = world.enemies()[0].pos;
    world.request_bonk();
    let out = world.resolve_hits(now);
    assert_eq!((out.hits, out.defeated), (1, 1));

    assert!(world.enemies().is_empty());
    assert_eq!(world.loot().len(), 1);
    assert_eq!(world.defeated_total(), 1);
    let orb = world.loot()[0];
    assert!((orb.pos.x - last_pos.x).abs() <= LOOT_JITTER);
    assert!((orb.pos.y - last_pos.y).abs() <= LOOT_JITTER);
    assert_eq!(orb.lifetime_ms(), LOOT_LIFETIME_MS);
}

#[test]
fn orb_expires_exactly_after_its_lifetime() {
    let mut world = empty_world();
    let t = 1_000.0;
    world.spawn_loot(Vec2::new(60.0, 60.0), t);

    let report = world.tick(0.0, t + LOOT_LIFETIME_MS - 1.0, &InputFrame::idle());
    assert_eq!(report.expired, 0);
    assert_eq!(world.loot().len(), 1);

    let report = world.tick(0.0, t + LOOT_LIFETIME_MS + 1.0, &InputFrame::idle());
    assert_eq!(report.expired, 1);
    assert!(world.loot().is_empty());
    assert_eq!(world.player().loot, 0);
}

#[test]
fn touching_orb_is_collected_once() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.spawn_loot(origin + Vec2::new(PLAYER_RADIUS + LOOT_RADIUS - 1.0, 0.0), 0.0);
    world.spawn_loot(origin + Vec2::new(-200.0, 0.0), 0.0);

    let report = world.tick(0.0, 10.0, &InputFrame::idle());
    assert_eq!(report.picked_up, 1);
    assert_eq!(world.player().loot, 1);
    assert_eq!(world.loot().len(), 1);

    let report = world.tick(0.0, 20.0, &InputFrame::idle());
    assert_eq!(report.picked_up, 0);
    assert_eq!(world.player().loot, 1);
}

#[test]
fn nearby_enemy_closes_in() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.spawn_enemy_at(origin + Vec2::new(-120.0, 50.0));
    let before = world.enemies()[0].pos.distance(origin);

    world.tick(0.016, 16.0, &InputFrame::idle());
    let after = world.enemies()[0].pos.distance(origin);
    assert!(after < before, "{} !< {}", after, before);
}

#[test]
fn enemy_that_catches_a_still_player_can_be_bonked() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.spawn_enemy_at(origin + Vec2::new(60.0, 25.0));

    let mut now = 0.0;
    for _ in 0..200 {
        now += 16.0;
        world.tick(0.016, now, &InputFrame::idle());
    }

    // It waits at contact distance instead of on the player's centre.
    let enemy = world.enemies()[0];
    let contact = PLAYER_RADIUS + ENEMY_RADIUS;
    assert!((enemy.pos.distance(origin) - contact).abs() < 1e-3, "{:?}", enemy.pos);

    let toward = (enemy.pos - origin).normalize();
    world.set_player_facing(toward);
    assert!(world.request_bonk());
    assert_eq!(world.resolve_hits(now).hits, 1);
}

#[test]
fn enemy_on_the_player_centre_is_hit_from_any_facing() {
    let mut hits = 0;
    for i in 0..16 {
        let mut world = empty_world();
        let origin = world.player().pos;
        world.spawn_enemy_at(origin);
        let angle = i as f32 / 16.0 * std::f32::consts::TAU;
        world.set_player_facing(Vec2::new(angle.cos(), angle.sin()));
        world.request_bonk();
        hits += world.resolve_hits(0.0).hits;
    }
    assert_eq!(hits, 16);
}

#[test]
fn distant_enemy_stays_idle() {
    let mut world = empty_world();
    world.place_player(Vec2::new(100.0, 100.0));
    let far = Vec2::new(100.0 + DETECTION_RADIUS + 50.0, 100.0);
    world.spawn_enemy_at(far);

    world.tick(0.016, 16.0, &InputFrame::idle());
    assert_eq!(world.enemies()[0].pos, far);
}

#[test]
fn bonk_request_while_active_is_a_no_op() {
    let mut world = empty_world();
    let origin = world.player().pos;
    world.spawn_enemy_at(origin + Vec2::new(20.0, 0.0));

    let report = world.tick(0.0, 0.0, &InputFrame::idle().with_attack());
    assert!(report.bonk_started);
    assert_eq!(report.hits, 1);

    let remaining = world.bonk().remaining();
    let struck = world.bonk().struck().len();
    assert!(!world.request_bonk());
    assert_eq!(world.bonk().remaining(), remaining);
    assert_eq!(world.bonk().struck().len(), struck);

    // An attack frame mid-swing neither restarts the timer nor clears hits.
    let report = world.tick(0.05, 16.0, &InputFrame::idle().with_attack());
    assert!(!report.bonk_started);
    assert!((world.bonk().remaining() - (BONK_DURATION - 0.05)).abs() < 1e-6);
    assert_eq!(world.bonk().struck().len(), struck);
}

#[test]
fn new_swing_after_the_previous_one_ends() {
    let mut world = empty_world();
    world.tick(0.0, 0.0, &InputFrame::idle().with_attack());
    let report = world.tick(BONK_DURATION + 0.01, 200.0, &InputFrame::idle().with_attack());
    assert!(report.bonk_ended);
    assert!(report.bonk_started);
    assert!(world.bonk().is_active());
}
