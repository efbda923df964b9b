//! GameView: maps `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and never mutates the world. It paints into
//! a pixel [`Canvas`] back to front, packs the canvas into cells, and then
//! writes the HUD text on top.

use glam::Vec2;

use crate::camera::Camera;
use crate::core::{World, FLOOR_PATCHES};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::Canvas;
use crate::types::{BONK_HALF_ARC, BONK_REACH, LOOT_MIN_ALPHA};

/// Outside the room.
pub const VOID_COLOR: Rgb = Rgb::new(8, 8, 12);
pub const FLOOR_COLOR: Rgb = Rgb::new(30, 32, 42);
/// Floor patch shades, indexed by `FloorPatch::tone`.
pub const PATCH_COLORS: [Rgb; 3] = [
    Rgb::new(38, 42, 54),
    Rgb::new(44, 40, 50),
    Rgb::new(34, 46, 44),
];
pub const WALL_COLOR: Rgb = Rgb::new(200, 200, 210);
pub const LOOT_COLOR: Rgb = Rgb::new(255, 210, 80);
pub const ENEMY_COLOR: Rgb = Rgb::new(220, 70, 70);
/// Enemy shade at zero health (blended toward `ENEMY_COLOR` by hp).
pub const ENEMY_HURT_COLOR: Rgb = Rgb::new(110, 40, 60);
pub const PLAYER_COLOR: Rgb = Rgb::new(90, 180, 255);
pub const FACING_COLOR: Rgb = Rgb::new(230, 245, 255);
pub const ARC_COLOR: Rgb = Rgb::new(255, 255, 255);

const HUD_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(230, 230, 230),
    bg: Rgb::new(16, 16, 22),
    bold: true,
    dim: false,
};

/// Terminal viewport dimensions (cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side state shown in the HUD (not part of the world).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostStatus {
    pub paused: bool,
}

/// Renders a [`World`] onto a half-block pixel canvas.
pub struct GameView {
    units_per_px: f32,
    canvas: Canvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl GameView {
    /// `units_per_px` is the zoom: world units covered by one pixel.
    pub fn new(units_per_px: f32) -> Self {
        Self {
            units_per_px,
            canvas: Canvas::new(0, 0),
        }
    }

    pub fn units_per_px(&self) -> f32 {
        self.units_per_px
    }

    /// Render the world into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &mut self,
        world: &World,
        now_ms: f64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_into_with_status(world, now_ms, &HostStatus::default(), viewport, fb);
    }

    pub fn render_into_with_status(
        &mut self,
        world: &World,
        now_ms: f64,
        status: &HostStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        self.canvas.resize(viewport.width, viewport.height.saturating_mul(2));
        self.canvas.clear(VOID_COLOR);

        let camera = Camera::follow(
            world.player().pos,
            Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32),
            self.units_per_px,
        );

        self.draw_floor(world, &camera);
        self.draw_loot(world, &camera, now_ms);
        self.draw_enemies(world, &camera);
        self.draw_player(world, &camera);

        self.canvas.resolve_into(fb, VOID_COLOR);

        self.draw_hud(fb, world, viewport);
        if status.paused {
            self.draw_overlay_text(fb, viewport, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, world: &World, now_ms: f64, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, now_ms, viewport, &mut fb);
        fb
    }

    fn draw_floor(&mut self, world: &World, camera: &Camera) {
        let room = world.room();
        let origin = camera.world_to_screen(Vec2::ZERO);
        let (w, h) = (camera.scale(room.width), camera.scale(room.height));
        self.canvas.fill_rect(origin.x, origin.y, w, h, FLOOR_COLOR, 1.0);

        for patch in FLOOR_PATCHES.iter() {
            let p = camera.world_to_screen(Vec2::new(patch.x, patch.y));
            let color = PATCH_COLORS[patch.tone as usize % PATCH_COLORS.len()];
            self.canvas.fill_rect(
                p.x,
                p.y,
                camera.scale(patch.w),
                camera.scale(patch.h),
                color,
                1.0,
            );
        }

        self.canvas.stroke_rect(origin.x, origin.y, w, h, WALL_COLOR, 1.0);
    }

    fn draw_loot(&mut self, world: &World, camera: &Camera, now_ms: f64) {
        for orb in world.loot() {
            let alpha = orb.remaining_fraction(now_ms).max(LOOT_MIN_ALPHA);
            let p = camera.world_to_screen(orb.pos);
            self.canvas.fill_circle(p.x, p.y, camera.scale(orb.radius), LOOT_COLOR, alpha);
        }
    }

    fn draw_enemies(&mut self, world: &World, camera: &Camera) {
        for enemy in world.enemies() {
            let color = ENEMY_HURT_COLOR.blend(ENEMY_COLOR, enemy.hp_fraction());
            let p = camera.world_to_screen(enemy.pos);
            self.canvas.fill_circle(p.x, p.y, camera.scale(enemy.radius), color, 1.0);
        }
    }

    fn draw_player(&mut self, world: &World, camera: &Camera) {
        let player = world.player();
        let c = camera.world_to_screen(player.pos);
        let r = camera.scale(player.radius);
        self.canvas.fill_circle(c.x, c.y, r, PLAYER_COLOR, 1.0);

        let tip = c + player.facing * r;
        self.canvas.line(c.x, c.y, tip.x, tip.y, FACING_COLOR, 0.8);

        let bonk = world.bonk();
        if bonk.is_active() {
            let dir = bonk.direction();
            let angle = dir.y.atan2(dir.x);
            let reach = camera.scale(BONK_REACH);
            self.canvas.stroke_arc(
                c.x,
                c.y,
                reach,
                angle - BONK_HALF_ARC,
                angle + BONK_HALF_ARC,
                ARC_COLOR,
                1.0,
            );
            for edge in [angle - BONK_HALF_ARC, angle + BONK_HALF_ARC] {
                let end = c + Vec2::new(edge.cos(), edge.sin()) * reach;
                self.canvas.line(c.x, c.y, end.x, end.y, ARC_COLOR, 0.35);
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }

        let mut x = fb.put_str(0, 0, " LOOT ", HUD_STYLE);
        x = fb.put_u32(x, 0, world.player().loot, HUD_STYLE);
        x = fb.put_str(x, 0, "  ENEMIES ", HUD_STYLE);
        x = fb.put_u32(x, 0, world.enemies().len() as u32, HUD_STYLE);
        if world.bonk().is_active() {
            let bonk = CellStyle {
                fg: Rgb::new(255, 230, 120),
                ..HUD_STYLE
            };
            x = fb.put_str(x, 0, "  BONK!", bonk);
        }
        fb.put_str(x, 0, " ", HUD_STYLE);

        let hint = "wasd move  space bonk  p pause  r restart  q quit ";
        let hint_w = hint.chars().count() as u16;
        if viewport.width >= x + 2 + hint_w {
            let dim = CellStyle {
                bold: false,
                dim: true,
                ..HUD_STYLE
            };
            fb.put_str(viewport.width - hint_w, 0, hint, dim);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let mid_y = viewport.height / 2;
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w + 2) / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let after = fb.put_str(x, mid_y, " ", style);
        let after = fb.put_str(after, mid_y, text, style);
        fb.put_str(after, mid_y, " ", style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldConfig;

    #[test]
    fn player_sits_at_viewport_centre() {
        let world = World::new(WorldConfig::empty(1));
        let mut view = GameView::default();
        let fb = view.render(&world, 0.0, Viewport::new(40, 20));

        // Canvas is 40x40 px with the player centred on (20, 20); pixel (18, 20)
        // is inside the disc and clear of the facing pip.
        let cell = fb.get(18, 10).unwrap();
        assert_eq!(cell.style.fg, PLAYER_COLOR);
    }

    #[test]
    fn hud_lists_loot_and_enemy_counts() {
        let world = World::new(WorldConfig::default());
        let mut view = GameView::default();
        let fb = view.render(&world, 0.0, Viewport::new(30, 10));
        let hud = fb.row_text(0);
        assert!(hud.contains("LOOT 0"), "{}", hud);
        assert!(hud.contains("ENEMIES 6"), "{}", hud);
        assert!(!hud.contains("BONK"));
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let world = World::new(WorldConfig::default());
        let mut view = GameView::default();
        let fb = view.render(&world, 0.0, Viewport::new(0, 0));
        assert_eq!(fb.width(), 0);
    }
}
