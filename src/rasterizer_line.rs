//! Line stroking: plain Bresenham and width-aware anti-aliased lines.
//!
//! Both rasterizers floor the segment endpoints to pixel coordinates and
//! write through [`RendererBase`], so clipping and compositing apply to
//! every stroked pixel.
//!
//! Segments reaching far outside the bitmap are first cut down with
//! Liang-Barsky clipping against the bitmap box plus a margin of the line
//! width. Segments already within that box are rasterized untouched.

use crate::basics::{ifloor, Line, Point, RectD};
use crate::color::{alpha, RGB_MASK};
use crate::renderer_base::RendererBase;

// ============================================================================
// Segment clipping
// ============================================================================

/// Liang-Barsky: the part of `line` inside `clip_box`, or `None` if the
/// segment misses it entirely.
pub fn clip_line(line: &Line, clip_box: &RectD) -> Option<Line> {
    let (x0, y0) = (line.start.x, line.start.y);
    let dx = line.end.x - x0;
    let dy = line.end.y - y0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-dx, x0 - clip_box.x1),
        (dx, clip_box.x2 - x0),
        (-dy, y0 - clip_box.y1),
        (dy, clip_box.y2 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some(Line::new(
        Point::new(x0 + t0 * dx, y0 + t0 * dy),
        Point::new(x0 + t1 * dx, y0 + t1 * dy),
    ))
}

/// `line` as it should be rasterized on the renderer's bitmap, or `None`
/// when nothing of it can land there.
fn fit_to_target(line: &Line, ren: &RendererBase<'_>, width: f64) -> Option<Line> {
    if !line.start.is_finite() || !line.end.is_finite() {
        return None;
    }
    let margin = width.max(1.0) + 2.0;
    let clip_box = RectD::new(
        -margin,
        -margin,
        ren.width() as f64 + margin,
        ren.height() as f64 + margin,
    );
    let inside = |p: &Point| clip_box.hit_test(p.x, p.y);
    if inside(&line.start) && inside(&line.end) {
        return Some(*line);
    }
    clip_line(line, &clip_box)
}

// ============================================================================
// Bresenham
// ============================================================================

/// One-pixel line in `color`, no coverage.
pub fn line_bresenham(line: &Line, ren: &mut RendererBase<'_>, color: u32) {
    let Some(line) = fit_to_target(line, ren, 1.0) else {
        return;
    };
    let mut x0 = ifloor(line.start.x);
    let mut y0 = ifloor(line.start.y);
    let x1 = ifloor(line.end.x);
    let y1 = ifloor(line.end.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = (y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) as f64 / 2.0;

    loop {
        ren.blend_pixel(x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = err;
        if e2 > -dx as f64 {
            err -= dy as f64;
            x0 += sx;
        }
        if e2 < dy as f64 {
            err += dx as f64;
            y0 += sy;
        }
    }
}

// ============================================================================
// Anti-aliased, width-aware
// ============================================================================

/// Anti-aliased line of the given `width` (Zingl's thick-line variant).
///
/// Each pixel's coverage comes from its Bresenham error term relative to
/// the segment length; the stroke color's alpha is scaled by it.
pub fn line_aa(line: &Line, ren: &mut RendererBase<'_>, color: u32, width: f64) {
    let width = if width.is_finite() && width > 0.0 { width } else { 1.0 };
    // Wider than the bitmap is indistinguishable from exactly as wide.
    let width = width.min((ren.width() as f64 + ren.height() as f64) * 2.0 + 1.0);
    let Some(line) = fit_to_target(line, ren, width) else {
        return;
    };

    let mut x0 = ifloor(line.start.x);
    let mut y0 = ifloor(line.start.y);
    let x1 = ifloor(line.end.x);
    let y1 = ifloor(line.end.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = (y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let ed = if dx + dy == 0 {
        1.0
    } else {
        ((dx * dx + dy * dy) as f64).sqrt()
    };
    let rgb = color & RGB_MASK;
    let a1 = alpha(color) as f64;
    let wd = (width + 1.0) / 2.0;
    let reach = ed * wd;

    let shade = |dist: i64| -> u32 {
        let a = (255.0 * (dist.abs() as f64 / ed - wd + 1.0)).clamp(0.0, 255.0).trunc();
        rgb | (a1 * (255.0 - a) / 255.0) as u32
    };

    loop {
        ren.blend_pixel(x0, y0, shade(err - dx + dy));
        let mut e2 = err;
        let mut x2 = x0;
        if 2 * e2 >= -dx {
            e2 += dy;
            let mut y2 = y0;
            while (e2 as f64) < reach && (y1 != y2 || dx > dy) {
                y2 += sy;
                ren.blend_pixel(x0, y2, shade(e2));
                e2 += dx;
            }
            if x0 == x1 {
                break;
            }
            e2 = err;
            err -= dy;
            x0 += sx;
        }
        if 2 * e2 <= dy {
            e2 = dx - e2;
            while (e2 as f64) < reach && (x1 != x2 || dx < dy) {
                x2 += sx;
                ren.blend_pixel(x2, y0, shade(e2));
                e2 += dy;
            }
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
