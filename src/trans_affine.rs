//! Affine transformation matrix and the save/restore transform stack.
//!
//! [`TransAffine`] is the bare 2x3 matrix. [`TransformStack`] layers the
//! canvas semantics on top: `translate`/`rotate`/`scale` compose on the
//! user-space side of the current matrix, and `save`/`restore` nest.

use crate::basics::Point;

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

#[inline]
fn is_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
/// In canvas terms `(a, b, c, d, e, f) = (sx, shy, shx, sy, tx, ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub fn new() -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Custom matrix from six components.
    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Rotation matrix. Positive angles turn clockwise when Y points down.
    pub fn new_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self::new_custom(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    // ====================================================================
    // Composition
    // ====================================================================

    /// Post-multiply: `self = self * m`, i.e. apply `self` first, then `m`.
    pub fn multiply(&mut self, m: &TransAffine) -> &mut Self {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    /// Pre-multiply: `self = m * self`, i.e. apply `m` first, then `self`.
    pub fn premultiply(&mut self, m: &TransAffine) -> &mut Self {
        let mut t = *m;
        t.multiply(self);
        *self = t;
        self
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform of a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    /// Determinant of the 2x2 portion.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// Check if this is an identity matrix.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.is_equal(&TransAffine::new(), epsilon)
    }

    /// Check if two matrices are equal within epsilon.
    pub fn is_equal(&self, m: &TransAffine, epsilon: f64) -> bool {
        is_equal_eps(self.sx, m.sx, epsilon)
            && is_equal_eps(self.shy, m.shy, epsilon)
            && is_equal_eps(self.shx, m.shx, epsilon)
            && is_equal_eps(self.sy, m.sy, epsilon)
            && is_equal_eps(self.tx, m.tx, epsilon)
            && is_equal_eps(self.ty, m.ty, epsilon)
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TransformStack
// ============================================================================

/// The current transform plus the stack of matrices pushed by `save()`.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    matrix: TransAffine,
    stack: Vec<TransAffine>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The matrix currently applied to new path points.
    pub fn matrix(&self) -> &TransAffine {
        &self.matrix
    }

    /// Number of saved matrices.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a copy of the current matrix.
    pub fn save(&mut self) {
        self.stack.push(self.matrix);
    }

    /// Pop the last saved matrix into place. No-op on an empty stack.
    pub fn restore(&mut self) {
        if let Some(m) = self.stack.pop() {
            self.matrix = m;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.matrix.premultiply(&TransAffine::new_translation(dx, dy));
    }

    /// Rotate by `theta` radians, clockwise in a Y-down coordinate system.
    pub fn rotate(&mut self, theta: f64) {
        self.matrix.premultiply(&TransAffine::new_rotation(theta));
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.matrix.premultiply(&TransAffine::new_scaling(sx, sy));
    }

    /// Compose an arbitrary matrix on the user-space side (canvas `transform()`).
    pub fn transform(&mut self, m: &TransAffine) {
        self.matrix.premultiply(m);
    }

    /// Replace the current matrix. The saved stack is untouched.
    pub fn set_matrix(&mut self, m: TransAffine) {
        self.matrix = m;
    }

    pub fn transform_point(&self, p: Point) -> Point {
        self.matrix.transform_point(p)
    }
}

// ============================================================================
// Tests
// ============================================================================
