//! Canvas-style drawing context over a borrowed [`Bitmap`].
//!
//! The context owns everything except the pixels: the transform stack, the
//! drawing state and its save/restore stack, the path under construction
//! and an optional shared font registry. Operations are split by concern
//! across the submodules.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;
mod transform;

use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::color::color_string_to_u32;
use crate::drawing_state::{DrawingState, TextAlign, TextBaseline};
use crate::error::CanvasResult;
use crate::geometry::RadialGradientParams;
use crate::gradient::{LinearGradient, Paint, RadialGradient};
use crate::path_storage::Path;
use crate::renderer_base::RendererBase;
use crate::text::FontRegistry;
use crate::trans_affine::TransformStack;

pub struct Context<'a> {
    /// Target pixels.
    pub(crate) bitmap: &'a mut Bitmap,
    pub(crate) transform: TransformStack,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states, parallel to the transform stack.
    state_stack: Vec<DrawingState>,
    /// Path under construction, in device space.
    pub(crate) path: Path,
    pub(crate) fonts: Option<Arc<FontRegistry>>,
}

impl<'a> Context<'a> {
    pub fn new(bitmap: &'a mut Bitmap) -> Self {
        Self {
            bitmap,
            transform: TransformStack::new(),
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path: Path::new(),
            fonts: None,
        }
    }

    /// A context that draws text with `fonts`.
    pub fn with_fonts(bitmap: &'a mut Bitmap, fonts: Arc<FontRegistry>) -> Self {
        let mut ctx = Self::new(bitmap);
        ctx.fonts = Some(fonts);
        ctx
    }

    pub fn set_fonts(&mut self, fonts: Arc<FontRegistry>) {
        self.fonts = Some(fonts);
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// The target bitmap, for reading pixels back mid-drawing.
    pub fn bitmap(&self) -> &Bitmap {
        &*self.bitmap
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// The path under construction.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // State stack
    // ========================================================================

    /// Push the transform and the full drawing state, clip included.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.transform.save();
        self.state_stack.push(self.state.clone());
    }

    /// Pop what the matching `save()` pushed. No-op when nothing is saved.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        self.transform.restore();
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    // ========================================================================
    // Style setters
    // ========================================================================

    /// Set the fill to a parsed color string.
    pub fn set_fill_style(&mut self, color: &str) -> CanvasResult<()> {
        self.state.fill = Paint::Solid(color_string_to_u32(color)?);
        Ok(())
    }

    /// Set the fill to a solid color or gradient.
    pub fn set_fill_paint(&mut self, paint: impl Into<Paint>) {
        self.state.fill = paint.into();
    }

    pub fn set_fill_color(&mut self, color: u32) {
        self.state.fill = Paint::Solid(color);
    }

    pub fn fill_paint(&self) -> &Paint {
        &self.state.fill
    }

    pub fn set_stroke_style(&mut self, color: &str) -> CanvasResult<()> {
        self.state.stroke_color = color_string_to_u32(color)?;
        Ok(())
    }

    pub fn set_stroke_color(&mut self, color: u32) {
        self.state.stroke_color = color;
    }

    pub fn stroke_color(&self) -> u32 {
        self.state.stroke_color
    }

    /// Set the line width. Non-finite and non-positive values are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Set the global alpha, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_global_alpha(&mut self, alpha: f64) {
        if !alpha.is_nan() {
            self.state.global_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    pub fn global_alpha(&self) -> f64 {
        self.state.global_alpha
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    /// Toggle anti-aliasing for fills and strokes.
    pub fn set_image_smoothing_enabled(&mut self, enabled: bool) {
        self.state.image_smoothing_enabled = enabled;
    }

    pub fn image_smoothing_enabled(&self) -> bool {
        self.state.image_smoothing_enabled
    }

    // ========================================================================
    // Gradients
    // ========================================================================

    pub fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        LinearGradient::new(x0, y0, x1, y1)
    }

    pub fn create_radial_gradient(&self, params: &RadialGradientParams) -> RadialGradient {
        RadialGradient::new(params)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Run `f` with a renderer over the bitmap that honors the current clip
    /// and global alpha.
    pub(crate) fn with_renderer<F>(&mut self, f: F)
    where
        F: FnOnce(&mut RendererBase<'_>, &DrawingState),
    {
        let mut clip = self.state.clip.take();
        {
            let mut ren = RendererBase::new(&mut *self.bitmap, clip.as_mut(), self.state.global_alpha);
            f(&mut ren, &self.state);
        }
        self.state.clip = clip;
    }
}

// ============================================================================
// Tests
// ============================================================================
