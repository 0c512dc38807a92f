//! Bitmap: the RGBA pixel buffer every drawing operation writes into.
//!
//! Pixels are stored row-major, top-down, four bytes each in R, G, B, A
//! order. The buffer is sized once at construction and never resized.
//! Coordinate accessors take `i64` so callers can pass rasterizer output
//! (which may be far outside the buffer) without casting; anything out of
//! range reads as transparent and is dropped on write.

use crate::color::{pack_rgba, unpack_rgba};
use crate::context::Context;
use crate::error::{CanvasError, CanvasResult};

/// Construction options for [`make`] and [`Bitmap::with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapOptions {
    /// Packed `0xRRGGBBAA` color to pre-fill; `None` leaves the buffer
    /// transparent.
    pub background: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn with_options(width: u32, height: u32, options: &BitmapOptions) -> Self {
        let mut bitmap = Self::new(width, height);
        if let Some(bg) = options.background {
            bitmap.fill(bg);
        }
        bitmap
    }

    /// Wrap an existing RGBA byte buffer.
    ///
    /// Fails with [`CanvasError::InvalidArgument`] when `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CanvasResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CanvasError::InvalidArgument(format!(
                "pixel data is {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// A drawing context targeting this bitmap.
    pub fn context(&mut self) -> Context<'_> {
        Context::new(self)
    }

    /// Byte offset of `(x, y)`, or `None` outside the buffer.
    #[inline]
    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Packed color at `(x, y)`; `0` outside the buffer.
    #[inline]
    pub fn get_pixel_rgba(&self, x: i64, y: i64) -> u32 {
        match self.offset(x, y) {
            Some(i) => {
                let p = &self.data[i..i + 4];
                pack_rgba(p[0], p[1], p[2], p[3])
            }
            None => 0,
        }
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-range writes are ignored.
    #[inline]
    pub fn set_pixel_rgba(&mut self, x: i64, y: i64, color: u32) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&unpack_rgba(color));
        }
    }

    /// Channel-wise variant of [`set_pixel_rgba`](Self::set_pixel_rgba).
    #[inline]
    pub fn set_pixel_rgba_i(&mut self, x: i64, y: i64, r: u8, g: u8, b: u8, a: u8) {
        self.set_pixel_rgba(x, y, pack_rgba(r, g, b, a));
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: u32) {
        let bytes = unpack_rgba(color);
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }
}

/// Bitmap factory: a new `width` x `height` buffer, transparent unless
/// `options` names a background.
pub fn make(width: u32, height: u32, options: Option<&BitmapOptions>) -> Bitmap {
    match options {
        Some(opts) => Bitmap::with_options(width, height, opts),
        None => Bitmap::new(width, height),
    }
}

// ============================================================================
// Tests
// ============================================================================
