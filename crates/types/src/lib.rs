//! Core types module - shared tuning constants and input values
//!
//! This module defines the fundamental values shared by the simulation, the
//! input layer and the renderer. Everything here is plain data with no
//! external dependencies, so it can be used from any crate in the workspace.
//!
//! # Units
//!
//! - **Distances** are world units. The room spans `ROOM_WIDTH x ROOM_HEIGHT`
//!   with the origin at the top-left corner and `y` growing downwards.
//! - **Speeds** are world units per second.
//! - **Durations** driving the simulation step are seconds (`f32`).
//! - **Timestamps** are host milliseconds (`f64`), monotonically increasing.
//!
//! # Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_SPEED` | 180 | Player movement speed |
//! | `ENEMY_SPEED` | 70 | Chase speed of an alerted enemy |
//! | `DETECTION_RADIUS` | 220 | Enemies closer than this chase the player |
//! | `ENEMY_HP` | 3 | Hit points of a fresh enemy |
//! | `BONK_DURATION` | 0.18 s | How long one swing stays active |
//! | `BONK_REACH` | 46 | Radius of the swing arc |
//! | `BONK_ARC_DEG` | 100° | Full angular width of the swing |
//! | `LOOT_LIFETIME_MS` | 8000 | Time before an uncollected orb despawns |
//!
//! # Examples
//!
//! ```
//! use bonk_arena_types::{InputFrame, Key, ROOM_HEIGHT, ROOM_WIDTH};
//!
//! assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
//! assert_eq!(Key::from_name("space"), Some(Key::Attack));
//!
//! let frame = InputFrame::moving(1.0, 0.0);
//! assert!(!frame.attack);
//!
//! assert!(ROOM_WIDTH > ROOM_HEIGHT);
//! ```

use std::f32::consts::PI;

/// Room width in world units
pub const ROOM_WIDTH: f32 = 960.0;

/// Room height in world units
pub const ROOM_HEIGHT: f32 = 720.0;

pub const PLAYER_RADIUS: f32 = 14.0;

/// Player movement speed (units per second)
pub const PLAYER_SPEED: f32 = 180.0;

pub const ENEMY_RADIUS: f32 = 14.0;

/// Chase speed (units per second)
pub const ENEMY_SPEED: f32 = 70.0;

/// Hit points of a freshly spawned enemy
pub const ENEMY_HP: i32 = 3;

/// Enemies strictly closer than this start chasing the player
pub const DETECTION_RADIUS: f32 = 220.0;

/// Active time of one swing (seconds)
pub const BONK_DURATION: f32 = 0.18;

/// Radius of the swing arc, measured from the player's centre
pub const BONK_REACH: f32 = 46.0;

/// Full angular width of the swing in degrees
pub const BONK_ARC_DEG: f32 = 100.0;

/// Half of the swing width in radians.
pub const BONK_HALF_ARC: f32 = BONK_ARC_DEG * 0.5 * PI / 180.0;

/// Damage dealt to every enemy caught by one swing
pub const BONK_DAMAGE: i32 = 1;

pub const LOOT_RADIUS: f32 = 6.0;

/// Lifetime of an uncollected loot orb (milliseconds)
pub const LOOT_LIFETIME_MS: f64 = 8000.0;

/// Maximum per-axis offset of a dropped orb from the defeated enemy
pub const LOOT_JITTER: f32 = 8.0;

/// Orbs never fade below this opacity
pub const LOOT_MIN_ALPHA: f32 = 0.25;

/// Upper bound on live enemies (also bounds the per-swing struck set)
pub const MAX_ENEMIES: usize = 32;

/// Enemies placed in the room when a run starts
pub const INITIAL_ENEMIES: usize = 6;

/// Random spawns never land closer than this to the player
pub const MIN_SPAWN_DISTANCE: f32 = 200.0;

/// Random placement attempts before a spawn is given up
pub const SPAWN_ATTEMPTS: u32 = 16;

/// Delay between clearing the room and the next wave (milliseconds)
pub const WAVE_DELAY_MS: f64 = 2500.0;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Simulation step clamp (seconds); long stalls never teleport entities
pub const MAX_FRAME_DT: f32 = 0.1;

/// Auto-release delay for terminals that never report key releases.
///
/// Must exceed the usual OS key-repeat delay, otherwise a held key flickers
/// between the first press and the first repeat.
pub const KEY_RELEASE_TIMEOUT_MS: f64 = 550.0;

const KEY_NAMES: [(&str, Key); 21] = [
    ("arrowup", Key::Up),
    ("up", Key::Up),
    ("w", Key::Up),
    ("k", Key::Up),
    ("arrowdown", Key::Down),
    ("down", Key::Down),
    ("s", Key::Down),
    ("j", Key::Down),
    ("arrowleft", Key::Left),
    ("left", Key::Left),
    ("a", Key::Left),
    ("h", Key::Left),
    ("arrowright", Key::Right),
    ("right", Key::Right),
    ("d", Key::Right),
    ("l", Key::Right),
    ("space", Key::Attack),
    ("spacebar", Key::Attack),
    ("attack", Key::Attack),
    ("f", Key::Attack),
    ("enter", Key::Attack),
];

/// Normalized key identity used by the input layer
///
/// Several physical keys map onto each variant (arrows, WASD, vim keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Attack,
}

impl Key {
    /// Number of distinct keys (for fixed-size key tables)
    pub const COUNT: usize = 5;

    pub const ALL: [Key; Key::COUNT] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Attack];

    /// Parse a textual key identifier (ASCII case-insensitive, no allocation)
    ///
    /// Accepts DOM-style names (`"ArrowLeft"`, `" "`), plain names (`"left"`,
    /// `"space"`), the WASD letters and the vim keys. `f` is an alternate attack.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonk_arena_types::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
    /// assert_eq!(Key::from_name("D"), Some(Key::Right));
    /// assert_eq!(Key::from_name("k"), Some(Key::Up));
    /// assert_eq!(Key::from_name(" "), Some(Key::Attack));
    /// assert_eq!(Key::from_name("escape"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        if s == " " {
            return Some(Key::Attack);
        }
        let s = s.trim();
        KEY_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, key)| key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Attack => "attack",
        }
    }

    /// Stable index into fixed-size key tables
    pub fn index(&self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Attack => 4,
        }
    }
}

/// One polled sample of player intent, taken once per frame.
///
/// `move_x`/`move_y` form a vector of length 0 or 1; `attack` is the
/// edge-triggered swing request (true for exactly one frame per key press).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    pub move_x: f32,
    pub move_y: f32,
    pub attack: bool,
}

impl InputFrame {
    /// No movement, no attack
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(move_x: f32, move_y: f32) -> Self {
        Self {
            move_x,
            move_y,
            attack: false,
        }
    }

    /// Same frame with the attack request raised
    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }
}

/// Host-level actions that never reach the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAction {
    /// Toggle pause (simulation clock stops)
    Pause,
    /// Start a fresh run with the same seed
    Restart,
    Quit,
}

impl MetaAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAction::Pause => "pause",
            MetaAction::Restart => "restart",
            MetaAction::Quit => "quit",
        }
    }
}
