//! Bezier curve flattening (quadratic and cubic).
//!
//! The two curve kinds are flattened differently:
//!
//! - **Quadratic**: fixed parametric sampling, always [`QUADRATIC_STEPS`]
//!   segments regardless of curvature.
//! - **Cubic**: adaptive de Casteljau subdivision at `t = 0.5` until the
//!   control polygon is within [`CUBIC_FLATNESS`] of its chord. Subdivision
//!   runs on an explicit worklist, so adversarial curves cost bounded memory.

use crate::basics::{Line, Point};

// ============================================================================
// Constants
// ============================================================================

/// Number of line segments emitted for every quadratic curve.
pub const QUADRATIC_STEPS: usize = 10;

/// Cubic pieces whose [`flatness`] is below this become a single chord.
pub const CUBIC_FLATNESS: f64 = 10.0;

/// Maximum subdivision depth for a cubic curve: at most `2^16` chords.
pub const CUBIC_MAX_DEPTH: u32 = 16;

// ============================================================================
// Quadratic
// ============================================================================

/// Point on the quadratic Bezier `p0 -> ctrl -> p2` at `t`.
pub fn quadratic_at(p0: Point, ctrl: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point::new(
        a * p0.x + b * ctrl.x + c * p2.x,
        a * p0.y + b * ctrl.y + c * p2.y,
    )
}

/// Append the flattened quadratic `p0 -> ctrl -> end` to `out`.
///
/// Samples `t = 0.1, 0.2, ..., 1.0`; the final segment ends exactly on
/// `end`. Returns the new current point.
pub fn flatten_quadratic(p0: Point, ctrl: Point, end: Point, out: &mut Vec<Line>) -> Point {
    let mut curr = p0;
    for i in 1..QUADRATIC_STEPS {
        let t = i as f64 / QUADRATIC_STEPS as f64;
        let pt = quadratic_at(p0, ctrl, end, t);
        out.push(Line::new(curr, pt));
        curr = pt;
    }
    out.push(Line::new(curr, end));
    end
}

// ============================================================================
// Cubic
// ============================================================================

/// Control polygon of a cubic Bezier: start, two control points, end.
pub type Cubic = [Point; 4];

/// Point on a cubic Bezier at `t`.
pub fn cubic_at(c: &Cubic, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let d = 3.0 * mt * t * t;
    let e = t * t * t;
    Point::new(
        a * c[0].x + b * c[1].x + d * c[2].x + e * c[3].x,
        a * c[0].y + b * c[1].y + d * c[2].y + e * c[3].y,
    )
}

/// Squared deviation of the control points from the chord, worst end per
/// axis.
///
/// Zero for a curve whose control points sit at the thirds of its chord.
pub fn flatness(c: &Cubic) -> f64 {
    let sq = |v: f64| v * v;
    let ux = sq(3.0 * c[1].x - 2.0 * c[0].x - c[3].x);
    let uy = sq(3.0 * c[1].y - 2.0 * c[0].y - c[3].y);
    let vx = sq(3.0 * c[2].x - 2.0 * c[3].x - c[0].x);
    let vy = sq(3.0 * c[2].y - 2.0 * c[3].y - c[0].y);
    ux.max(vx) + uy.max(vy)
}

/// De Casteljau split of `c` at `t` into the `[0, t]` and `[t, 1]` pieces.
pub fn split_cubic(c: &Cubic, t: f64) -> (Cubic, Cubic) {
    let p12 = c[0].lerp(&c[1], t);
    let p23 = c[1].lerp(&c[2], t);
    let p34 = c[2].lerp(&c[3], t);
    let p123 = p12.lerp(&p23, t);
    let p234 = p23.lerp(&p34, t);
    let mid = p123.lerp(&p234, t);
    ([c[0], p12, p123, mid], [mid, p234, p34, c[3]])
}

/// Append the adaptively flattened cubic to `out`, one chord per leaf in
/// curve order. Returns the curve's end point.
///
/// Non-finite control points skip subdivision and emit the bare chord.
pub fn flatten_cubic(c: &Cubic, out: &mut Vec<Line>) -> Point {
    if !c.iter().all(Point::is_finite) {
        out.push(Line::new(c[0], c[3]));
        return c[3];
    }

    // Last-in first-out: push the right half before the left so chords come
    // out in order.
    let mut work: Vec<(Cubic, u32)> = vec![(*c, 0)];
    while let Some((piece, depth)) = work.pop() {
        if depth >= CUBIC_MAX_DEPTH || flatness(&piece) < CUBIC_FLATNESS {
            out.push(Line::new(piece[0], piece[3]));
            continue;
        }
        let (left, right) = split_cubic(&piece, 0.5);
        work.push((right, depth + 1));
        work.push((left, depth + 1));
    }
    c[3]
}

// ============================================================================
// Tests
// ============================================================================
