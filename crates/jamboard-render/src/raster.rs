//! Software RGBA surface.

use crate::surface::{Snapshot, Surface};
use kurbo::{Point, Vec2};
use peniko::Color;

/// In-memory RGBA8 canvas.
///
/// A pixel is painted when its center lies within `width / 2` of the stroked
/// segment. There is no antialiasing or blending: paint replaces pixels, so
/// replaying the same actions always yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    background: [u8; 4],
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Create a white surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::from_rgba8(255, 255, 255, 255))
    }

    /// Create a surface filled with `background`.
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let rgba = background.to_rgba8();
        let background = [rgba.r, rgba.g, rgba.b, rgba.a];
        Self {
            width,
            height,
            background,
            pixels: filled(width, height, background),
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether every pixel is the background color.
    pub fn is_blank(&self) -> bool {
        self.pixels
            .chunks_exact(4)
            .all(|px| px == self.background.as_slice())
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}

fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(width as usize * height as usize)
}

/// Distance from a point to a line segment (a→b).
fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn background(&self) -> Color {
        let [r, g, b, a] = self.background;
        Color::from_rgba8(r, g, b, a)
    }

    fn clear(&mut self) {
        let background = self.background;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&background);
        }
    }

    fn stroke_segment(&mut self, from: Point, to: Point, color: Color, width: f64) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let rgba = color.to_rgba8();
        let rgba = [rgba.r, rgba.g, rgba.b, rgba.a];
        // Half a pixel at least, so hairlines still cover their row.
        let radius = (width / 2.0).max(0.5);

        let max_x = self.width as f64 - 1.0;
        let max_y = self.height as f64 - 1.0;
        let x0 = (from.x.min(to.x) - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (from.x.max(to.x) + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (from.y.min(to.y) - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (from.y.max(to.y) + radius).ceil().clamp(0.0, max_y) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if point_to_segment_dist(center, from, to) <= radius {
                    self.put(x, y, rgba);
                }
            }
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            rgba: self.pixels.clone(),
        }
    }

    fn draw_snapshot(&mut self, snapshot: &Snapshot) {
        let cols = self.width.min(snapshot.width) as usize;
        let rows = self.height.min(snapshot.height) as usize;
        let dst_stride = self.width as usize * 4;
        let src_stride = snapshot.width as usize * 4;

        for row in 0..rows {
            let dst = row * dst_stride;
            let src = row * src_stride;
            self.pixels[dst..dst + cols * 4].copy_from_slice(&snapshot.rgba[src..src + cols * 4]);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        log::debug!(
            "resizing surface {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        let snapshot = self.snapshot();
        self.width = width;
        self.height = height;
        self.pixels = filled(width, height, self.background);
        self.draw_snapshot(&snapshot);
    }
}
