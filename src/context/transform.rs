//! Transform operations for Context.
//!
//! The matrix only affects path points as they are appended. Rect
//! operations, images and gradients work in untransformed pixel space.

use super::Context;
use crate::trans_affine::TransAffine;

impl Context<'_> {
    pub fn translate(&mut self, x: f64, y: f64) {
        log::debug!(target: "canvas", "translate {} {}", x, y);
        self.transform.translate(x, y);
    }

    /// Rotate by `angle` radians (clockwise on screen).
    pub fn rotate(&mut self, angle: f64) {
        log::debug!(target: "canvas", "rotate {}", angle);
        self.transform.rotate(angle);
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        log::debug!(target: "canvas", "scale {} {}", x, y);
        self.transform.scale(x, y);
    }

    /// Compose `(a, b, c, d, e, f)` with the current matrix.
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        log::debug!(target: "canvas", "transform {} {} {} {} {} {}", a, b, c, d, e, f);
        self.transform
            .transform(&TransAffine::new_custom(a, b, c, d, e, f));
    }

    /// Replace the current matrix.
    pub fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        log::debug!(target: "canvas", "setTransform {} {} {} {} {} {}", a, b, c, d, e, f);
        self.transform
            .set_matrix(TransAffine::new_custom(a, b, c, d, e, f));
    }

    pub fn reset_transform(&mut self) {
        log::debug!(target: "canvas", "resetTransform");
        self.transform.set_matrix(TransAffine::new());
    }

    pub fn get_transform(&self) -> TransAffine {
        *self.transform.matrix()
    }
}
