//! Entity records: player, enemies, loot orbs and the bonk singleton.

use arrayvec::ArrayVec;
use glam::Vec2;

use crate::math::normalize;
use crate::types::{
    BONK_DURATION, ENEMY_HP, ENEMY_RADIUS, LOOT_RADIUS, MAX_ENEMIES, PLAYER_RADIUS,
};

/// Player avatar. One instance per world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Unit vector; updated whenever the player moves
    pub facing: Vec2,
    pub loot: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            facing: Vec2::X,
            loot: 0,
        }
    }
}

/// Monotonic enemy identity, never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
}

impl Enemy {
    pub fn new(id: EnemyId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: ENEMY_RADIUS,
            hp: ENEMY_HP,
        }
    }

    /// Remaining health in [0, 1], for shading.
    pub fn hp_fraction(&self) -> f32 {
        (self.hp as f32 / ENEMY_HP as f32).clamp(0.0, 1.0)
    }
}

/// Timed pickup dropped by a defeated enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootOrb {
    pub pos: Vec2,
    pub radius: f32,
    pub spawned_at_ms: f64,
    pub expires_at_ms: f64,
}

impl LootOrb {
    /// Negative lifetimes are treated as zero.
    pub fn new(pos: Vec2, now_ms: f64, lifetime_ms: f64) -> Self {
        Self {
            pos,
            radius: LOOT_RADIUS,
            spawned_at_ms: now_ms,
            expires_at_ms: now_ms + lifetime_ms.max(0.0),
        }
    }

    pub fn lifetime_ms(&self) -> f64 {
        self.expires_at_ms - self.spawned_at_ms
    }

    /// Expired once `now` is strictly past the expiry timestamp.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// Fraction of the lifetime still left, in [0, 1].
    pub fn remaining_fraction(&self, now_ms: f64) -> f32 {
        let lifetime = self.lifetime_ms();
        if lifetime <= 0.0 {
            return 0.0;
        }
        ((self.expires_at_ms - now_ms) / lifetime).clamp(0.0, 1.0) as f32
    }
}

/// Set of enemy ids already struck by the current swing.
///
/// Bounded by `MAX_ENEMIES`; lives inline so swings never allocate.
#[derive(Debug, Clone, Default)]
pub struct StruckSet {
    ids: ArrayVec<EnemyId, MAX_ENEMIES>,
}

impl StruckSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` was newly added.
    ///
    /// A full set refuses new ids, which can only ever suppress a hit.
    pub fn insert(&mut self, id: EnemyId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.try_push(id).is_ok()
    }

    pub fn contains(&self, id: EnemyId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The melee swing.
///
/// Idle → Active (countdown, struck set accumulating) → Idle. Activation is
/// refused while a swing is already running.
#[derive(Debug, Clone)]
pub struct BonkState {
    active: bool,
    remaining: f32,
    direction: Vec2,
    struck: StruckSet,
}

impl BonkState {
    pub fn new() -> Self {
        Self {
            active: false,
            remaining: 0.0,
            direction: Vec2::X,
            struck: StruckSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left in the current swing (0 when idle)
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn struck(&self) -> &StruckSet {
        &self.struck
    }

    /// Start a swing toward `facing`.
    ///
    /// Falls back to +X when `facing` is degenerate. Returns `false` (and
    /// changes nothing) while a swing is already active.
    pub fn try_activate(&mut self, facing: Vec2) -> bool {
        if self.active {
            return false;
        }
        let dir = normalize(facing);
        self.direction = if dir == Vec2::ZERO { Vec2::X } else { dir };
        self.remaining = BONK_DURATION;
        self.struck.clear();
        self.active = true;
        true
    }

    /// Count the swing down by `dt` seconds. Returns `true` when it ended.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.active = false;
            self.struck.clear();
            return true;
        }
        false
    }

    pub(crate) fn mark_struck(&mut self, id: EnemyId) -> bool {
        self.struck.insert(id)
    }
}

impl Default for BonkState {
    fn default() -> Self {
        Self::new()
    }
}
