//! Foundation geometry types and numeric helpers.
//!
//! Everything else in the crate builds on these: [`Point`] and [`Line`] are
//! plain values, [`Rect`] is the axis-aligned box used for path bounds.

use core::ops::{Add, Mul, Sub};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Floor a double to an `i64` pixel coordinate.
///
/// The `as` cast saturates, so huge or non-finite values never wrap.
#[inline]
pub fn ifloor(v: f64) -> i64 {
    v.floor() as i64
}

/// Fractional part of `v`, always in `[0, 1)` for finite input.
#[inline]
pub fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Clamp `v` into `[lo, hi]`.
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Linear interpolation from `a` to `b` by `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Point
// ============================================================================

/// A 2D point. Carries no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product, treating both points as vectors.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Point on the segment `self -> other` at parameter `t`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

// ============================================================================
// Line
// ============================================================================

/// A straight segment between two device-space points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

pub type RectD = Rect<f64>;

/// Axis-aligned bounds over the endpoints of `lines`.
///
/// Returns `None` for an empty slice.
pub fn bounding_rect(lines: &[Line]) -> Option<RectD> {
    let mut iter = lines.iter().flat_map(|l| [l.start, l.end]);
    let first = iter.next()?;
    let mut r = RectD::new(first.x, first.y, first.x, first.y);
    for p in iter {
        r.x1 = r.x1.min(p.x);
        r.y1 = r.y1.min(p.y);
        r.x2 = r.x2.max(p.x);
        r.y2 = r.y2.max(p.y);
    }
    Some(r)
}

// ============================================================================
// Tests
// ============================================================================
