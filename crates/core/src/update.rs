//! Per-frame sub-steps of the update engine.
//!
//! Each step mutates only the pieces of world state it is handed, so steps can
//! be exercised in isolation. [`crate::World::tick`] runs them in order:
//! movement, bonk timer, bonk activation, enemy AI, hit resolution, loot.

use glam::Vec2;
use log::debug;

use crate::entity::{BonkState, Enemy, LootOrb, Player};
use crate::math::{distance, normalize, within_arc};
use crate::rng::SimpleRng;
use crate::room::Room;
use crate::types::{
    BONK_DAMAGE, BONK_HALF_ARC, BONK_REACH, DETECTION_RADIUS, ENEMY_SPEED, LOOT_JITTER,
    LOOT_LIFETIME_MS, PLAYER_SPEED,
};

/// Outcome of one hit-resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitOutcome {
    pub hits: u32,
    pub defeated: u32,
}

/// Outcome of one loot lifecycle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LootOutcome {
    pub picked_up: u32,
    pub expired: u32,
}

/// Move the player along `intent` and clamp to the room.
///
/// Intents longer than 1 are normalized; a non-zero intent also turns the
/// player to face it.
pub fn move_player(player: &mut Player, intent: Vec2, dt: f32, room: &Room) {
    let intent = if intent.length_squared() > 1.0 {
        normalize(intent)
    } else {
        intent
    };
    if intent != Vec2::ZERO && intent.is_finite() {
        player.facing = normalize(intent);
        player.pos += intent * PLAYER_SPEED * dt;
    }
    player.pos = room.clamp(player.pos, player.radius);
}

/// Enemies within [`DETECTION_RADIUS`] step toward `target`; others hold.
///
/// An enemy stops once its edge touches the target's edge (`target_radius +
/// enemy.radius`), so it never ends up on the target's centre.
pub fn chase_player(
    enemies: &mut [Enemy],
    target: Vec2,
    target_radius: f32,
    dt: f32,
    room: &Room,
) {
    let step = ENEMY_SPEED * dt;
    for enemy in enemies.iter_mut() {
        let dist = distance(enemy.pos, target);
        let gap = dist - (target_radius + enemy.radius);
        if dist < DETECTION_RADIUS && gap > 0.0 {
            let dir = normalize(target - enemy.pos);
            enemy.pos += dir * step.min(gap);
        }
        enemy.pos = room.clamp(enemy.pos, enemy.radius);
    }
}

/// Apply the active swing to every enemy it has not struck yet.
///
/// An enemy is hit when it is within reach (plus its radius) and inside the
/// swing cone. An enemy sitting on the origin has no direction and counts as
/// inside every cone. Defeated enemies drop one orb near their position and are
/// removed; iteration runs in reverse index order so removal is safe.
pub fn resolve_bonk_hits(
    bonk: &mut BonkState,
    origin: Vec2,
    enemies: &mut Vec<Enemy>,
    loot: &mut Vec<LootOrb>,
    rng: &mut SimpleRng,
    now_ms: f64,
) -> HitOutcome {
    let mut out = HitOutcome::default();
    if !bonk.is_active() {
        return out;
    }

    let dir = bonk.direction();
    let cos_half_arc = BONK_HALF_ARC.cos();

    for i in (0..enemies.len()).rev() {
        let enemy = enemies[i];
        if bonk.struck().contains(enemy.id) {
            continue;
        }

        let to_enemy = enemy.pos - origin;
        let dist = to_enemy.length();
        let in_cone = dist <= f32::EPSILON || within_arc(dir, to_enemy, cos_half_arc);
        if dist > BONK_REACH + enemy.radius || !in_cone {
            continue;
        }
        if !bonk.mark_struck(enemy.id) {
            continue;
        }

        out.hits += 1;
        enemies[i].hp -= BONK_DAMAGE;
        if enemies[i].hp <= 0 {
            let drop_at = enemy.pos + rng.jitter(LOOT_JITTER);
            loot.push(LootOrb::new(drop_at, now_ms, LOOT_LIFETIME_MS));
            enemies.swap_remove(i);
            out.defeated += 1;
            debug!("enemy {} defeated at ({:.0}, {:.0})", enemy.id.0, enemy.pos.x, enemy.pos.y);
        }
    }

    out
}

/// Expire or collect loot orbs.
///
/// Expiry is checked first, so an orb past its deadline can never be picked
/// up in the same frame.
pub fn update_loot(loot: &mut Vec<LootOrb>, player: &mut Player, now_ms: f64) -> LootOutcome {
    let mut out = LootOutcome::default();
    for i in (0..loot.len()).rev() {
        let orb = loot[i];
        if orb.is_expired(now_ms) {
            loot.swap_remove(i);
            out.expired += 1;
        } else if distance(orb.pos, player.pos) < orb.radius + player.radius {
            loot.swap_remove(i);
            player.loot += 1;
            out.picked_up += 1;
        }
    }
    if out.picked_up > 0 || out.expired > 0 {
        debug!(
            "loot: {} picked up, {} expired, total {}",
            out.picked_up, out.expired, player.loot
        );
    }
    out
}
