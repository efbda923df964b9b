//! Camera that keeps the player centred on the canvas.

use glam::Vec2;

/// Maps world units onto canvas pixels.
///
/// `offset` is the screen centre minus the followed position (both in world
/// units), so `screen = (world + offset) / units_per_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub units_per_px: f32,
}

impl Camera {
    /// Centre `target` on a canvas of `canvas_px` pixels.
    pub fn follow(target: Vec2, canvas_px: Vec2, units_per_px: f32) -> Self {
        let units_per_px = if units_per_px > 0.0 && units_per_px.is_finite() {
            units_per_px
        } else {
            1.0
        };
        let center = canvas_px * 0.5 * units_per_px;
        Self {
            offset: center - target,
            units_per_px,
        }
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p + self.offset) / self.units_per_px
    }

    /// World length in pixels.
    pub fn scale(&self, len: f32) -> f32 {
        len / self.units_per_px
    }
}
