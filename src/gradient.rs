//! Gradients and the fill [`Paint`] variant.
//!
//! Gradient geometry is in device pixels and is sampled at integer pixel
//! coordinates; the transform in effect when the gradient is used does not
//! move it.

use crate::basics::{clamp, Point};
use crate::color::Rgba8;
use crate::geometry::RadialGradientParams;

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f64,
    /// Packed `0xRRGGBBAA` color at this stop.
    pub color: u32,
}

/// Stops kept in ascending offset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientStops {
    stops: Vec<GradientStop>,
}

impl GradientStops {
    /// Insert a stop after any existing stops with the same offset.
    ///
    /// Offsets are clamped to `[0, 1]`; a NaN offset is dropped.
    pub fn add(&mut self, offset: f64, color: u32) {
        if offset.is_nan() {
            return;
        }
        let offset = clamp(offset, 0.0, 1.0);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, GradientStop { offset, color });
    }

    pub fn as_slice(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Interpolated color at `t`. Clamps to the end stops; no stops is
    /// transparent.
    pub fn color_at(&self, t: f64) -> u32 {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        // First stop strictly past t; t > first.offset guarantees idx >= 1.
        let idx = self.stops.partition_point(|s| s.offset <= t);
        let lo = &self.stops[idx - 1];
        let hi = &self.stops[idx];
        let span = hi.offset - lo.offset;
        if span <= 0.0 {
            return hi.color;
        }
        let k = (t - lo.offset) / span;
        Rgba8::from_u32(lo.color)
            .gradient(&Rgba8::from_u32(hi.color), k)
            .to_u32()
    }
}

// ============================================================================
// LinearGradient
// ============================================================================

/// Gradient along the vector from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: GradientStops,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            stops: GradientStops::default(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f64, color: u32) {
        self.stops.add(offset, color);
    }

    /// Projection parameter of `(x, y)` onto the gradient vector, in `[0, 1]`.
    pub fn offset_at(&self, x: f64, y: f64) -> f64 {
        let v = self.end - self.start;
        let len2 = v.dot(&v);
        if len2 <= 0.0 || !len2.is_finite() {
            return 0.0;
        }
        let t = (Point::new(x, y) - self.start).dot(&v) / len2;
        if t.is_nan() {
            return 0.0;
        }
        clamp(t, 0.0, 1.0)
    }

    pub fn color_at(&self, x: f64, y: f64) -> u32 {
        self.stops.color_at(self.offset_at(x, y))
    }
}

// ============================================================================
// RadialGradient
// ============================================================================

/// Gradient by distance from the first center, ramping from `r0` to `r1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub params: RadialGradientParams,
    pub stops: GradientStops,
}

impl RadialGradient {
    pub fn new(params: &RadialGradientParams) -> Self {
        Self {
            params: *params,
            stops: GradientStops::default(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f64, color: u32) {
        self.stops.add(offset, color);
    }

    pub fn offset_at(&self, x: f64, y: f64) -> f64 {
        let p = &self.params;
        let d = Point::new(x, y).distance(&Point::new(p.x0, p.y0));
        let span = p.r1 - p.r0;
        if span == 0.0 {
            return if d <= p.r0 { 0.0 } else { 1.0 };
        }
        let t = (d - p.r0) / span;
        if t.is_nan() {
            return 0.0;
        }
        clamp(t, 0.0, 1.0)
    }

    pub fn color_at(&self, x: f64, y: f64) -> u32 {
        self.stops.color_at(self.offset_at(x, y))
    }
}

// ============================================================================
// Paint
// ============================================================================

/// Fill style: a solid packed color or a gradient evaluated per pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(u32),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn color_at(&self, x: f64, y: f64) -> u32 {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.color_at(x, y),
            Paint::Radial(g) => g.color_at(x, y),
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Paint::Solid(_))
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(crate::color::BLACK)
    }
}

impl From<u32> for Paint {
    fn from(c: u32) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::Radial(g)
    }
}

// ============================================================================
// Tests
// ============================================================================
