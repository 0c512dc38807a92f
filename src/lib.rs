//! # raster-canvas
//!
//! Headless 2D rasterizer with a canvas-style drawing API over an in-memory
//! RGBA bitmap.
//!
//! - Affine transform stack with save/restore
//! - Paths of lines, quadratic and cubic Beziers, and arcs
//! - Even-odd scanline fills, optionally anti-aliased at span edges
//! - Bresenham and width-aware anti-aliased line strokes
//! - Solid, linear-gradient and radial-gradient paint
//! - Source-over compositing with global alpha
//! - Clipping to an arbitrary path
//! - Text through a pluggable glyph outliner
//!
//! ## Architecture
//!
//! Drawing flows through four stages:
//!
//! 1. **Path** - commands recorded in device space by the [`Context`]
//! 2. **Flattening** - curves and arcs reduced to line segments
//! 3. **Rasterizer** - scanline fill or line stroke computes pixel colors
//! 4. **Renderer** - clip test, composite and write into the [`Bitmap`]
//!
//! ## Example
//!
//! ```rust
//! use raster_canvas::Bitmap;
//!
//! let mut bitmap = Bitmap::new(200, 200);
//! let mut ctx = bitmap.context();
//! ctx.set_fill_style("red").unwrap();
//! ctx.fill_rect(10.0, 10.0, 100.0, 50.0);
//! drop(ctx);
//! assert_eq!(bitmap.get_pixel_rgba(50, 30), 0xFF0000FF);
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod named_colors;
pub mod trans_affine;

// Geometry
pub mod curves;
pub mod geometry;
pub mod path_storage;

// Pixels and rasterization
pub mod bitmap;
pub mod clip_region;
pub mod comp_op;
pub mod gradient;
pub mod rasterizer_line;
pub mod rasterizer_scanline;
pub mod renderer_base;

// Canvas API
pub mod context;
pub mod drawing_state;
pub mod text;

#[cfg(feature = "codec")]
pub mod codec;
#[cfg(feature = "font")]
pub mod font_engine;

pub use bitmap::{make, Bitmap, BitmapOptions};
pub use context::Context;
pub use drawing_state::{DrawingState, FontSpec, TextAlign, TextBaseline};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{ArcParams, ImageCropParams, RadialGradientParams};
pub use gradient::{LinearGradient, Paint, RadialGradient};
pub use text::{FontRegistry, GlyphCommand, GlyphOutliner, TextMetrics};
pub use trans_affine::TransAffine;
