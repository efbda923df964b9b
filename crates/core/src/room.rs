//! Room bounds and static floor decoration.

use glam::Vec2;

use crate::math::clamp_inside;
use crate::types::{ROOM_HEIGHT, ROOM_WIDTH};

/// Rectangular world extent; positions are clamped into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub width: f32,
    pub height: f32,
}

impl Room {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a circle of `radius` centred at `p` into the room.
    pub fn clamp(&self, p: Vec2, radius: f32) -> Vec2 {
        clamp_inside(p, radius, self.width, self.height)
    }

    /// Whether a circle of `radius` at `p` lies fully inside the room.
    pub fn contains(&self, p: Vec2, radius: f32) -> bool {
        p.x >= radius && p.x <= self.width - radius && p.y >= radius && p.y <= self.height - radius
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new(ROOM_WIDTH, ROOM_HEIGHT)
    }
}

/// Decorative floor rectangle. Purely visual; nothing collides with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPatch {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Shade index into the renderer's floor palette
    pub tone: u8,
}

impl FloorPatch {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, tone: u8) -> Self {
        Self { x, y, w, h, tone }
    }
}

/// Fixed floor layout of the room.
pub const FLOOR_PATCHES: [FloorPatch; 7] = [
    FloorPatch::new(60.0, 60.0, 220.0, 140.0, 0),
    FloorPatch::new(380.0, 90.0, 180.0, 90.0, 1),
    FloorPatch::new(660.0, 50.0, 240.0, 200.0, 2),
    FloorPatch::new(120.0, 320.0, 160.0, 260.0, 1),
    FloorPatch::new(400.0, 300.0, 160.0, 120.0, 0),
    FloorPatch::new(620.0, 400.0, 280.0, 150.0, 2),
    FloorPatch::new(330.0, 560.0, 230.0, 110.0, 1),
];
