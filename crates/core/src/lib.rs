//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the entity model and the per-frame update engine.
//! It has **no dependencies** on the terminal, input devices or the clock,
//! which makes it:
//!
//! - **Deterministic**: Same seed and the same input frames produce the same run
//! - **Testable**: Every rule can be driven from plain [`InputFrame`] values
//! - **Portable**: Runs headless, in benches, or behind any renderer
//!
//! # Module Structure
//!
//! - [`math`]: Vector normalization, distance, room clamping, arc test
//! - [`rng`]: Deterministic LCG used for spawn placement and loot jitter
//! - [`entity`]: Player, enemies, loot orbs and the bonk state machine
//! - [`room`]: Room bounds and the static floor layout
//! - [`update`]: The individual per-frame sub-steps
//! - [`world`]: `World`, which owns all state and orders the sub-steps
//!
//! # Frame order
//!
//! 1. Player movement (clamped to the room)
//! 2. Bonk timer countdown
//! 3. Bonk activation from the input edge (ignored mid-swing)
//! 4. Enemy chase inside the detection radius
//! 5. Bonk hit resolution (each enemy at most once per swing)
//! 6. Loot expiry, then loot pickup
//!
//! # Example
//!
//! ```
//! use bonk_arena_core::{World, WorldConfig};
//! use bonk_arena_types::InputFrame;
//! use glam::Vec2;
//!
//! let mut world = World::new(WorldConfig::empty(7));
//! let start = world.player().pos;
//! world.spawn_enemy_at(start + Vec2::new(30.0, 0.0));
//!
//! // Swing to the right (the default facing).
//! let report = world.tick(0.016, 16.0, &InputFrame::idle().with_attack());
//! assert!(report.bonk_started);
//! assert_eq!(report.hits, 1);
//! ```

pub mod entity;
pub mod math;
pub mod rng;
pub mod room;
pub mod update;
pub mod world;

pub use bonk_arena_types as types;

// Re-export commonly used types for convenience
pub use entity::{BonkState, Enemy, EnemyId, LootOrb, Player, StruckSet};
pub use rng::SimpleRng;
pub use room::{FloorPatch, Room, FLOOR_PATCHES};
pub use types::InputFrame;
pub use world::{FrameReport, World, WorldConfig};
