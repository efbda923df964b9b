//! Bonk Arena (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `bonk_arena::{types,core,input,term}` and adds the
//! host-side pieces shared by the binaries: configuration, logging and the
//! frame clock.

pub use bonk_arena_core as core;
pub use bonk_arena_input as input;
pub use bonk_arena_term as term;
pub use bonk_arena_types as types;

pub mod clock;
pub mod config;
pub mod logging;
