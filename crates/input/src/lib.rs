//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto [`crate::types::Key`] and keeps a polled
//! key-state table that the game loop samples once per frame, including on
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use bonk_arena_types as types;

pub use handler::InputHandler;
pub use map::{key_from_code, key_from_event, meta_action};
