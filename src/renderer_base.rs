//! Base renderer with clipping and compositing.
//!
//! Every pixel the fill and stroke engines produce goes through
//! [`RendererBase::blend_pixel`]: bounds check, clip test, source-over
//! composite, write. Pixels outside the bitmap or the clip are dropped.

use crate::bitmap::Bitmap;
use crate::clip_region::ClipRegion;
use crate::comp_op::composite;

// ============================================================================
// RendererBase: clip-and-composite pixel sink
// ============================================================================

pub struct RendererBase<'a> {
    bitmap: &'a mut Bitmap,
    clip: Option<&'a mut ClipRegion>,
    global_alpha: f64,
}

impl<'a> RendererBase<'a> {
    pub fn new(bitmap: &'a mut Bitmap, clip: Option<&'a mut ClipRegion>, global_alpha: f64) -> Self {
        Self {
            bitmap,
            clip,
            global_alpha,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    /// Is `(x, y)` on the bitmap?
    #[inline]
    pub fn inbox(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Does the clip (if any) let `(x, y)` through?
    #[inline]
    pub fn pixel_inside_clip(&mut self, x: i64, y: i64) -> bool {
        match self.clip.as_deref_mut() {
            Some(clip) => clip.contains(x, y),
            None => true,
        }
    }

    /// Composite `color` over the pixel at `(x, y)` if it is on the bitmap
    /// and inside the clip.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: u32) {
        if !self.inbox(x, y) || !self.pixel_inside_clip(x, y) {
            return;
        }
        let old = self.bitmap.get_pixel_rgba(x, y);
        let out = composite(old, color, self.global_alpha);
        self.bitmap.set_pixel_rgba(x, y, out);
    }

    /// Current pixel value, `0` off the bitmap.
    pub fn pixel(&self, x: i64, y: i64) -> u32 {
        self.bitmap.get_pixel_rgba(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
