//! Path construction for Context.
//!
//! Every point is run through the current transform before it is stored.

use super::Context;
use crate::basics::{Point, PI};
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::ArcParams;

/// Angular step used to approximate arcs with line segments.
const ARC_STEP: f64 = PI / 16.0;

impl Context<'_> {
    fn device_point(&self, x: f64, y: f64) -> Point {
        self.transform.transform_point(Point::new(x, y))
    }

    /// Discard the current path.
    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        self.path.move_to(p);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device_point(x, y);
        self.path.line_to(p);
    }

    pub fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        let ctrl = self.device_point(cpx, cpy);
        let end = self.device_point(x, y);
        self.path.quadratic_to(ctrl, end);
    }

    pub fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        let ctrl1 = self.device_point(cp1x, cp1y);
        let ctrl2 = self.device_point(cp2x, cp2y);
        let end = self.device_point(x, y);
        self.path.bezier_to(ctrl1, ctrl2, end);
    }

    /// Line back to the start of the current sub-path.
    pub fn close_path(&mut self) {
        self.path.close();
    }

    /// Circular arc as a new sub-path of straight segments.
    ///
    /// The arc starts with a `move_to` on its first point and steps by
    /// [`ARC_STEP`] up to the end angle. Angles are normalized so the sweep
    /// runs forward and never exceeds a full turn. Non-finite arguments add
    /// nothing.
    pub fn arc(&mut self, params: &ArcParams) {
        let ArcParams {
            x,
            y,
            radius,
            mut start_angle,
            mut end_angle,
            anticlockwise,
        } = *params;
        if ![x, y, radius, start_angle, end_angle]
            .iter()
            .all(|v| v.is_finite())
        {
            return;
        }

        let full = 2.0 * PI;
        if start_angle > end_angle {
            end_angle += full;
        }
        if anticlockwise {
            let tmp = end_angle;
            end_angle = start_angle + full;
            start_angle = tmp;
        }
        if end_angle - start_angle > full {
            end_angle = start_angle + full;
        }

        let at = |a: f64| Point::new(x + a.cos() * radius, y + a.sin() * radius);
        let first = at(start_angle);
        self.move_to(first.x, first.y);
        let steps = ((end_angle - start_angle) / ARC_STEP).floor();
        if steps >= 0.0 {
            for i in 0..=steps as usize {
                let p = at(start_angle + i as f64 * ARC_STEP);
                self.line_to(p.x, p.y);
            }
        }
        let last = at(end_angle);
        self.line_to(last.x, last.y);
    }

    pub fn arc_to(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _radius: f64) -> CanvasResult<()> {
        Err(CanvasError::NotSupported("arcTo"))
    }

    pub fn rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) -> CanvasResult<()> {
        Err(CanvasError::NotSupported("rect"))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        _x: f64,
        _y: f64,
        _radius_x: f64,
        _radius_y: f64,
        _rotation: f64,
        _start_angle: f64,
        _end_angle: f64,
        _anticlockwise: bool,
    ) -> CanvasResult<()> {
        Err(CanvasError::NotSupported("ellipse"))
    }
}
