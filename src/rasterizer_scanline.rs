//! Scanline polygon fill.
//!
//! Even-odd rule over a list of device-space lines. Each integer row `y`
//! is intersected with every edge that straddles it; the sorted crossings
//! are taken in pairs as inside spans. The anti-aliased variant weights the
//! first and last pixel of each span by fractional coverage.
//!
//! Rows are walked bottom-up from the bounding box, clamped to the target
//! bitmap so far-off geometry costs nothing.

use crate::basics::{bounding_rect, fract, ifloor, Line};
use crate::color::{alpha, with_alpha};
use crate::gradient::Paint;
use crate::renderer_base::RendererBase;

/// X coordinates where row `y` crosses `lines`, ascending.
///
/// An edge counts when one endpoint is strictly above `y` and the other is
/// on or below it, so a vertex shared by two edges is counted once.
pub fn sorted_intersections(lines: &[Line], y: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = lines
        .iter()
        .filter_map(|l| {
            let (a, b) = (l.start, l.end);
            if (a.y < y && b.y >= y) || (b.y < y && a.y >= y) {
                Some(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x))
            } else {
                None
            }
        })
        .collect();
    xs.sort_by(f64::total_cmp);
    xs
}

/// Fill the area enclosed by `lines` with `paint`.
///
/// `lines` should already be closed; see `Path::to_closed_lines`. When
/// `anti_alias` is set, the span end pixels get `floor(coverage * alpha)`
/// of the paint color's alpha. An unmatched final crossing on a row is
/// ignored.
pub fn fill_lines(lines: &[Line], ren: &mut RendererBase<'_>, paint: &Paint, anti_alias: bool) {
    let Some(bounds) = bounding_rect(lines) else {
        return;
    };
    if !(bounds.y1.is_finite() && bounds.y2.is_finite()) {
        return;
    }

    let width = ren.width() as i64;
    let height = ren.height() as i64;
    let top = ifloor(bounds.y1).max(0);
    let bottom = (bounds.y2.ceil() as i64).saturating_sub(1).min(height - 1);

    let mut y = bottom;
    while y >= top {
        let xs = sorted_intersections(lines, y as f64);
        for pair in xs.chunks_exact(2) {
            let (x0, x1) = (pair[0], pair[1]);
            let start = ifloor(x0);
            let end = ifloor(x1);
            let first = start.max(0);
            let last = end.min(width - 1);
            let mut x = first;
            while x <= last {
                let mut color = paint.color_at(x as f64, y as f64);
                if anti_alias && (x == start || x == end) {
                    let coverage = if x == start { 1.0 - fract(x0) } else { fract(x1) };
                    let a = (coverage * alpha(color) as f64).floor().clamp(0.0, 255.0);
                    color = with_alpha(color, a as u8);
                }
                ren.blend_pixel(x, y, color);
                x += 1;
            }
        }
        y -= 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::Point;
    use crate::bitmap::Bitmap;

    const BLACK: u32 = 0x0000_00FF;
    const WHITE: u32 = 0xFFFF_FFFF;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Line> {
        let p = [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ];
        (0..4).map(|i| Line::new(p[i], p[(i + 1) % 4])).collect()
    }

    fn fill(bitmap: &mut Bitmap, lines: &[Line], paint: &Paint, aa: bool) {
        let mut ren = RendererBase::new(bitmap, None, 1.0);
        fill_lines(lines, &mut ren, paint, aa);
    }

    #[test]
    fn test_intersections_sorted_and_half_open() {
        let lines = square(10.0, 10.0, 100.0, 100.0);
        assert_eq!(sorted_intersections(&lines, 50.0), vec![10.0, 100.0]);
        // Top edge row is excluded, bottom edge row included.
        assert!(sorted_intersections(&lines, 10.0).is_empty());
        assert_eq!(sorted_intersections(&lines, 100.0).len(), 2);
        // Horizontal edges never contribute.
        let flat = [Line::from_coords(0.0, 5.0, 10.0, 5.0)];
        assert!(sorted_intersections(&flat, 5.0).is_empty());
    }

    #[test]
    fn test_fill_square_non_aa() {
        let mut b = Bitmap::new(200, 200);
        b.fill(WHITE);
        fill(&mut b, &square(10.0, 10.0, 100.0, 100.0), &Paint::Solid(BLACK), false);
        assert_eq!(b.get_pixel_rgba(11, 11), BLACK);
        assert_eq!(b.get_pixel_rgba(50, 50), BLACK);
        assert_eq!(b.get_pixel_rgba(100, 100), WHITE);
        assert_eq!(b.get_pixel_rgba(0, 0), WHITE);
    }

    #[test]
    fn test_fractional_bottom_row_is_filled() {
        for aa in [false, true] {
            let mut b = Bitmap::new(30, 30);
            b.fill(WHITE);
            fill(&mut b, &square(2.0, 10.5, 20.0, 20.5), &Paint::Solid(BLACK), aa);
            assert_eq!(b.get_pixel_rgba(5, 19), BLACK, "aa={aa}");
            assert_eq!(b.get_pixel_rgba(5, 20), BLACK, "aa={aa}");
            assert_eq!(b.get_pixel_rgba(5, 21), WHITE, "aa={aa}");
            assert_eq!(b.get_pixel_rgba(5, 10), WHITE, "aa={aa}");
        }
    }

    #[test]
    fn test_fill_is_idempotent() {
        let tri = vec![
            Line::from_coords(20.0, 5.0, 60.0, 70.0),
            Line::from_coords(60.0, 70.0, 3.5, 50.25),
            Line::from_coords(3.5, 50.25, 20.0, 5.0),
        ];
        let paint = Paint::Solid(0x3366_99FF);
        let mut once = Bitmap::new(80, 80);
        fill(&mut once, &tri, &paint, false);
        let mut twice = once.clone();
        fill(&mut twice, &tri, &paint, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aa_edge_coverage() {
        let mut b = Bitmap::new(20, 20);
        fill(&mut b, &square(2.5, 2.0, 10.25, 10.0), &Paint::Solid(BLACK), true);
        // Half of the first pixel, a quarter of the last.
        assert_eq!(b.get_pixel_rgba(2, 5), 0x0000_007F);
        assert_eq!(b.get_pixel_rgba(10, 5), 0x0000_003F);
        assert_eq!(b.get_pixel_rgba(5, 5), BLACK);
    }

    #[test]
    fn test_far_offscreen_geometry_is_clamped() {
        let mut b = Bitmap::new(10, 10);
        fill(&mut b, &square(-1e9, -1e9, 1e9, 1e9), &Paint::Solid(BLACK), false);
        assert_eq!(b.get_pixel_rgba(0, 0), BLACK);
        assert_eq!(b.get_pixel_rgba(9, 8), BLACK);
    }

    #[test]
    fn test_odd_crossing_dropped() {
        let mut b = Bitmap::new(10, 10);
        let lines = [Line::from_coords(5.0, 0.0, 5.0, 10.0)];
        fill(&mut b, &lines, &Paint::Solid(BLACK), false);
        assert!(b.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_lines() {
        let mut b = Bitmap::new(10, 10);
        fill(&mut b, &[], &Paint::Solid(BLACK), true);
        assert!(b.data().iter().all(|&v| v == 0));
    }
}
