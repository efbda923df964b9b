//! World module - the complete, explicitly owned game state
//!
//! `World` replaces ambient globals: the host owns one instance, feeds it one
//! [`InputFrame`] per frame through [`World::tick`], and the renderer borrows
//! it read-only afterwards.

use glam::Vec2;
use log::{debug, info};

use crate::entity::{BonkState, Enemy, EnemyId, LootOrb, Player};
use crate::math::distance;
use crate::rng::SimpleRng;
use crate::room::Room;
use crate::types::*;
use crate::update;

/// Setup of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    pub seed: u32,
    /// Enemies spawned when the run starts (capped at `MAX_ENEMIES`)
    pub initial_enemies: usize,
    /// Spawn a fresh wave a while after the room is cleared
    pub waves: bool,
}

impl WorldConfig {
    /// An empty room without waves, for scripted scenarios.
    pub fn empty(seed: u32) -> Self {
        Self {
            seed,
            initial_enemies: 0,
            waves: false,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            initial_enemies: INITIAL_ENEMIES,
            waves: true,
        }
    }
}

/// What happened during one [`World::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub bonk_started: bool,
    pub bonk_ended: bool,
    pub hits: u32,
    pub defeated: u32,
    pub picked_up: u32,
    pub expired: u32,
    pub spawned: u32,
}

impl FrameReport {
    /// Nothing worth logging happened.
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    config: WorldConfig,
    room: Room,
    player: Player,
    enemies: Vec<Enemy>,
    loot: Vec<LootOrb>,
    bonk: BonkState,
    rng: SimpleRng,
    next_enemy_id: u32,
    defeated_total: u32,
    /// Monotonic run id (increments on restart)
    episode: u32,
    wave: u32,
    next_wave_at_ms: Option<f64>,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let room = Room::default();
        let mut world = Self {
            config,
            room,
            player: Player::new(room.center()),
            enemies: Vec::with_capacity(MAX_ENEMIES),
            loot: Vec::with_capacity(MAX_ENEMIES * 2),
            bonk: BonkState::new(),
            rng: SimpleRng::new(config.seed),
            next_enemy_id: 0,
            defeated_total: 0,
            episode: 0,
            wave: 0,
            next_wave_at_ms: None,
        };
        for _ in 0..config.initial_enemies.min(MAX_ENEMIES) {
            world.spawn_enemy();
        }
        world
    }

    pub fn config(&self) -> WorldConfig {
        self.config
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn loot(&self) -> &[LootOrb] {
        &self.loot
    }

    pub fn bonk(&self) -> &BonkState {
        &self.bonk
    }

    pub fn defeated_total(&self) -> u32 {
        self.defeated_total
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Move the player directly (clamped into the room). Scenario setup only.
    pub fn place_player(&mut self, pos: Vec2) {
        self.player.pos = self.room.clamp(pos, self.player.radius);
    }

    pub fn set_player_facing(&mut self, facing: Vec2) {
        self.player.facing = facing;
    }

    /// Spawn one enemy at a random spot at least `MIN_SPAWN_DISTANCE` from the
    /// player.
    ///
    /// Returns `None` at the enemy cap or when no spot was found within
    /// `SPAWN_ATTEMPTS` tries.
    pub fn spawn_enemy(&mut self) -> Option<EnemyId> {
        if self.enemies.len() >= MAX_ENEMIES {
            return None;
        }
        for _ in 0..SPAWN_ATTEMPTS {
            let pos = Vec2::new(
                self.rng.range(ENEMY_RADIUS, self.room.width - ENEMY_RADIUS),
                self.rng.range(ENEMY_RADIUS, self.room.height - ENEMY_RADIUS),
            );
            if distance(pos, self.player.pos) >= MIN_SPAWN_DISTANCE {
                return self.push_enemy(pos);
            }
        }
        debug!("no spawn spot found after {} attempts", SPAWN_ATTEMPTS);
        None
    }

    /// Spawn one enemy at `pos` (clamped into the room).
    ///
    /// Skips the distance floor but still honours the enemy cap.
    pub fn spawn_enemy_at(&mut self, pos: Vec2) -> Option<EnemyId> {
        if self.enemies.len() >= MAX_ENEMIES {
            return None;
        }
        self.push_enemy(self.room.clamp(pos, ENEMY_RADIUS))
    }

    fn push_enemy(&mut self, pos: Vec2) -> Option<EnemyId> {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);
        self.enemies.push(Enemy::new(id, pos));
        Some(id)
    }

    /// Drop a loot orb with the standard lifetime.
    pub fn spawn_loot(&mut self, pos: Vec2, now_ms: f64) {
        self.loot.push(LootOrb::new(pos, now_ms, LOOT_LIFETIME_MS));
    }

    /// Start a swing toward the player's facing. Ignored mid-swing.
    pub fn request_bonk(&mut self) -> bool {
        self.bonk.try_activate(self.player.facing)
    }

    /// Run one more hit-resolution pass without advancing time.
    pub fn resolve_hits(&mut self, now_ms: f64) -> update::HitOutcome {
        let out = update::resolve_bonk_hits(
            &mut self.bonk,
            self.player.pos,
            &mut self.enemies,
            &mut self.loot,
            &mut self.rng,
            now_ms,
        );
        self.defeated_total += out.defeated;
        out
    }

    /// Advance the world by `dt` seconds.
    ///
    /// Negative or non-finite `dt` counts as zero. `now_ms` is the frame
    /// timestamp used for loot expiry.
    pub fn tick(&mut self, dt: f32, now_ms: f64, input: &InputFrame) -> FrameReport {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let mut report = FrameReport::default();

        update::move_player(
            &mut self.player,
            Vec2::new(input.move_x, input.move_y),
            dt,
            &self.room,
        );

        report.bonk_ended = self.bonk.advance(dt);
        if input.attack {
            report.bonk_started = self.request_bonk();
        }

        update::chase_player(
            &mut self.enemies,
            self.player.pos,
            self.player.radius,
            dt,
            &self.room,
        );

        if self.bonk.is_active() {
            let hits = self.resolve_hits(now_ms);
            report.hits = hits.hits;
            report.defeated = hits.defeated;
        }

        let loot = update::update_loot(&mut self.loot, &mut self.player, now_ms);
        report.picked_up = loot.picked_up;
        report.expired = loot.expired;

        report.spawned = self.advance_waves(now_ms);
        report
    }

    fn advance_waves(&mut self, now_ms: f64) -> u32 {
        if !self.config.waves || !self.enemies.is_empty() {
            self.next_wave_at_ms = None;
            return 0;
        }

        let Some(due) = self.next_wave_at_ms else {
            self.next_wave_at_ms = Some(now_ms + WAVE_DELAY_MS);
            return 0;
        };
        if now_ms < due {
            return 0;
        }

        self.next_wave_at_ms = None;
        self.wave += 1;
        let count = (self.config.initial_enemies + self.wave as usize).min(MAX_ENEMIES);
        let mut spawned = 0;
        for _ in 0..count {
            if self.spawn_enemy().is_some() {
                spawned += 1;
            }
        }
        info!("wave {}: {} enemies", self.wave, spawned);
        spawned
    }

    /// Start over with the same configuration.
    pub fn restart(&mut self) {
        let next_episode = self.episode.wrapping_add(1);
        *self = Self::new(self.config);
        self.episode = next_episode;
        info!("restart: episode {}", self.episode);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
