//! Raster surface abstraction.

use kurbo::{BezPath, PathEl, Point};
use peniko::Color;
use thiserror::Error;

/// Flattening tolerance for curves, in pixels.
pub(crate) const FLATTEN_TOLERANCE: f64 = 0.25;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("Image decoding failed: {0}")]
    Decode(String),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Point-in-time copy of a surface's pixels.
///
/// `rgba.len()` is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// RGBA pixel data (4 bytes per pixel), row-major.
    pub(crate) rgba: Vec<u8>,
}

impl Snapshot {
    /// Wrap raw RGBA data, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RendererError::InvalidSnapshot(format!(
                "{}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }
}

/// A 2D raster canvas that drawing actions are painted onto.
///
/// The surface keeps no style state between calls: every paint operation
/// carries its own color and width.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Background color used by `clear` and by newly exposed area on resize.
    fn background(&self) -> Color;

    /// Fill the whole surface with the background color.
    fn clear(&mut self);

    /// Stroke a straight segment with round caps.
    fn stroke_segment(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Stroke a path. Curves are flattened; consecutive segments share round
    /// caps, which gives round joins.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let mut subpath_start: Option<Point> = None;
        let mut current: Option<Point> = None;

        kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => {
                subpath_start = Some(p);
                current = Some(p);
            }
            PathEl::LineTo(p) => {
                if let Some(from) = current {
                    self.stroke_segment(from, p, color, width);
                }
                current = Some(p);
            }
            PathEl::ClosePath => {
                if let (Some(from), Some(start)) = (current, subpath_start) {
                    if from != start {
                        self.stroke_segment(from, start, color, width);
                    }
                }
                current = subpath_start;
            }
            // flatten only emits lines
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;

    /// Copy the current pixels.
    fn snapshot(&self) -> Snapshot;

    /// Draw a snapshot at the origin, cropped to the surface.
    fn draw_snapshot(&mut self, snapshot: &Snapshot);

    /// Change the surface size, keeping the visible pixels that still fit.
    fn resize(&mut self, width: u32, height: u32);
}
