//! Terminal rendering for the arena.
//!
//! The world is painted onto a pixel [`Canvas`] and packed two pixels per
//! cell with the upper half block, so the arena looks roughly square on
//! common fonts. The resulting framebuffer is diff-flushed by
//! [`TerminalRenderer`].
//!
//! | Module | Role |
//! |--------|------|
//! | [`fb`] | Cells, styles and the framebuffer |
//! | [`raster`] | Pixel canvas with alpha-blended primitives |
//! | [`camera`] | World units to canvas pixels, centred on the player |
//! | [`game_view`] | Paints a `World` (pure, no I/O) |
//! | [`renderer`] | Terminal session and diff encoding |

pub mod camera;
pub mod fb;
pub mod game_view;
pub mod raster;
pub mod renderer;

pub use bonk_arena_core as core;
pub use bonk_arena_types as types;

pub use camera::Camera;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{GameView, HostStatus, Viewport};
pub use raster::Canvas;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
