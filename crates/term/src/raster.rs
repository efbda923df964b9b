//! Pixel canvas: the 2D raster surface the game view paints into.
//!
//! Coordinates are in pixels with the origin at the top-left; pixel `(i, j)`
//! covers `[i, i+1) x [j, j+1)`. Shapes cover the pixels whose centres fall
//! inside them. Drawing outside the canvas is clipped silently.
//!
//! [`Canvas::resolve_into`] packs two vertically stacked pixels into each
//! terminal cell, which keeps pixels roughly square on common fonts.

use crate::fb::{Cell, FrameBuffer, Rgb};

/// RGB pixel buffer with alpha-blended primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize(width as usize * height as usize, Rgb::default());
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Blend one pixel; out-of-bounds writes are dropped.
    pub fn blend_px(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = self.pixels[i].blend(color, alpha);
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        let (x0, x1) = pixel_span(x, x + w, self.width);
        let (y0, y1) = pixel_span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_px(px, py, color, alpha);
            }
        }
    }

    /// One-pixel outline of the rectangle.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        let left = x.floor() as i32;
        let top = y.floor() as i32;
        let right = (x + w).ceil() as i32 - 1;
        let bottom = (y + h).ceil() as i32 - 1;
        if right < left || bottom < top {
            return;
        }

        let xs = left.max(-1)..=right.min(self.width as i32);
        for px in xs {
            self.blend_px(px, top, color, alpha);
            if bottom != top {
                self.blend_px(px, bottom, color, alpha);
            }
        }
        let ys = (top + 1).max(-1)..=(bottom - 1).min(self.height as i32);
        for py in ys {
            self.blend_px(left, py, color, alpha);
            if right != left {
                self.blend_px(right, py, color, alpha);
            }
        }
    }

    /// Filled disc. A radius below half a pixel still marks the centre pixel.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb, alpha: f32) {
        if r < 0.5 {
            self.blend_px(cx.floor() as i32, cy.floor() as i32, color, alpha);
            return;
        }
        let (x0, x1) = pixel_span(cx - r, cx + r, self.width);
        let (y0, y1) = pixel_span(cy - r, cy + r, self.height);
        let r2 = r * r;
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.blend_px(px, py, color, alpha);
                }
            }
        }
    }

    /// Arc of radius `r` from angle `start` to `end` (radians, y down).
    pub fn stroke_arc(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        start: f32,
        end: f32,
        color: Rgb,
        alpha: f32,
    ) {
        let sweep = end - start;
        let steps = ((r * sweep.abs() * 2.0).ceil() as i32).clamp(4, 720);
        let mut last = None;
        for i in 0..=steps {
            let a = start + sweep * (i as f32 / steps as f32);
            let px = (cx + r * a.cos()).floor() as i32;
            let py = (cy + r * a.sin()).floor() as i32;
            // Consecutive samples often land on the same pixel; blend it once.
            if last != Some((px, py)) {
                self.blend_px(px, py, color, alpha);
                last = Some((px, py));
            }
        }
    }

    /// Straight segment between two points.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb, alpha: f32) {
        let len = ((x1 - x0).abs()).max((y1 - y0).abs());
        let steps = (len.ceil() as i32).clamp(1, 4096);
        let mut last = None;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let px = (x0 + (x1 - x0) * t).floor() as i32;
            let py = (y0 + (y1 - y0) * t).floor() as i32;
            if last != Some((px, py)) {
                self.blend_px(px, py, color, alpha);
                last = Some((px, py));
            }
        }
    }

    /// Pack pixel rows pairwise into `fb` starting at cell `(0, 0)`.
    ///
    /// An odd last row is paired with `pad`.
    pub fn resolve_into(&self, fb: &mut FrameBuffer, pad: Rgb) {
        let rows = self.height.div_ceil(2);
        for cy in 0..rows.min(fb.height()) {
            for cx in 0..self.width.min(fb.width()) {
                let top = self.get(cx as i32, (cy * 2) as i32).unwrap_or(pad);
                let bottom = self.get(cx as i32, (cy * 2 + 1) as i32).unwrap_or(pad);
                fb.set(cx, cy, Cell::pixel_pair(top, bottom));
            }
        }
    }
}

/// Pixel index range `[lo, hi)` whose centres lie in `[a, b)`, clipped to `[0, limit)`.
fn pixel_span(a: f32, b: f32, limit: u16) -> (i32, i32) {
    if !(a.is_finite() && b.is_finite()) {
        return (0, 0);
    }
    let lo = (a - 0.5).ceil().max(0.0) as i32;
    let hi = ((b - 0.5).ceil() as i32).min(limit as i32);
    (lo, hi.max(lo))
}
