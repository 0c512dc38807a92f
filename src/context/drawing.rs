//! Rectangle, fill, stroke and clip operations for Context.

use super::Context;
use crate::basics::ifloor;
use crate::clip_region::ClipRegion;
use crate::color::TRANSPARENT;
use crate::rasterizer_line::{line_aa, line_bresenham};
use crate::rasterizer_scanline::fill_lines;

/// Pixel columns (or rows) covered by a rect edge starting at `pos` with
/// extent `len`: `floor(pos)` onwards, `ceil(len)` of them. Negative
/// extents are flipped. `None` for non-finite input.
fn pixel_span(pos: f64, len: f64) -> Option<(i64, i64)> {
    if !pos.is_finite() || !len.is_finite() {
        return None;
    }
    let (pos, len) = if len < 0.0 { (pos + len, -len) } else { (pos, len) };
    let start = ifloor(pos);
    Some((start, start.saturating_add(len.ceil() as i64)))
}

impl Context<'_> {
    // ========================================================================
    // Rectangles
    // ========================================================================

    /// Paint the rect with the fill style, ignoring the transform.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", x, y, width, height);
        let (Some((x0, x1)), Some((y0, y1))) = (pixel_span(x, width), pixel_span(y, height)) else {
            return;
        };
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width() as i64);
        let y1 = y1.min(self.height() as i64);
        self.with_renderer(|ren, state| {
            for j in y0..y1 {
                for i in x0..x1 {
                    let color = state.fill.color_at(i as f64, j as f64);
                    ren.blend_pixel(i, j, color);
                }
            }
        });
    }

    /// Set the rect to transparent black. No clip, no compositing.
    pub fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        log::debug!(target: "canvas", "clearRect {} {} {} {}", x, y, width, height);
        let (Some((x0, x1)), Some((y0, y1))) = (pixel_span(x, width), pixel_span(y, height)) else {
            return;
        };
        let x1 = x1.min(self.width() as i64);
        let y1 = y1.min(self.height() as i64);
        for j in y0.max(0)..y1 {
            for i in x0.max(0)..x1 {
                self.bitmap.set_pixel_rgba(i, j, TRANSPARENT);
            }
        }
    }

    /// One-pixel rect outline in the stroke color, ignoring the transform
    /// and line width.
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        log::debug!(target: "canvas", "strokeRect {} {} {} {}", x, y, width, height);
        let (Some((x0, x1)), Some((y0, y1))) = (pixel_span(x, width), pixel_span(y, height)) else {
            return;
        };
        let right = ifloor(x.min(x + width) + width.abs());
        let bottom = ifloor(y.min(y + height) + height.abs());
        let w = self.width() as i64;
        let h = self.height() as i64;
        self.with_renderer(|ren, state| {
            let color = state.stroke_color;
            for i in x0.max(0)..x1.min(w) {
                ren.blend_pixel(i, y0, color);
                ren.blend_pixel(i, bottom, color);
            }
            for j in y0.max(0)..y1.min(h) {
                ren.blend_pixel(x0, j, color);
                ren.blend_pixel(right, j, color);
            }
        });
    }

    // ========================================================================
    // Path rendering
    // ========================================================================

    /// Make the current path, implicitly closed, the clip region.
    pub fn clip(&mut self) {
        log::debug!(target: "canvas", "clip");
        self.state.clip = Some(ClipRegion::new(self.path.to_closed_lines()));
    }

    /// Fill the current path with the fill style (even-odd rule).
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        let lines = self.path.to_closed_lines();
        self.with_renderer(|ren, state| {
            fill_lines(&lines, ren, &state.fill, state.image_smoothing_enabled);
        });
    }

    /// Stroke every segment of the current path with the stroke color.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        let lines = self.path.to_lines();
        self.with_renderer(|ren, state| {
            for line in &lines {
                if state.image_smoothing_enabled {
                    line_aa(line, ren, state.stroke_color, state.line_width);
                } else {
                    line_bresenham(line, ren, state.stroke_color);
                }
            }
        });
    }
}
