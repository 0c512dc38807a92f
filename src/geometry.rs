//! Parameter structs for canvas drawing operations.
//!
//! These replace long positional argument lists with named fields.

/// Parameters for a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// X coordinate of the arc center.
    pub x: f64,
    /// Y coordinate of the arc center.
    pub y: f64,
    pub radius: f64,
    /// Starting angle in radians.
    pub start_angle: f64,
    /// Ending angle in radians.
    pub end_angle: f64,
    /// If true, sweep counterclockwise.
    pub anticlockwise: bool,
}

/// Parameters for a radial gradient between two circles.
///
/// Only the first center is used for the distance; the second circle
/// contributes its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradientParams {
    pub x0: f64,
    pub y0: f64,
    /// Radius at which the gradient reaches offset 0.
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Radius at which the gradient reaches offset 1.
    pub r1: f64,
}

/// Source crop and destination rectangle for `draw_image_cropped`.
///
/// The 2-argument and 4-argument forms of `draw_image` normalize into this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageCropParams {
    /// Source rectangle X.
    pub sx: f64,
    /// Source rectangle Y.
    pub sy: f64,
    /// Source rectangle width.
    pub s_width: f64,
    /// Source rectangle height.
    pub s_height: f64,
    /// Destination X.
    pub dx: f64,
    /// Destination Y.
    pub dy: f64,
    /// Destination width.
    pub d_width: f64,
    /// Destination height.
    pub d_height: f64,
}
