//! Image operations for Context.
//!
//! `draw_image` copies source pixels straight into the target: no clip,
//! no global alpha, no compositing and no transform. Scaling is
//! nearest-neighbor.

use super::Context;
use crate::basics::ifloor;
use crate::bitmap::Bitmap;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::ImageCropParams;

impl Context<'_> {
    /// Copy all of `image` with its top-left corner at `(dx, dy)`.
    pub fn draw_image(&mut self, image: &Bitmap, dx: f64, dy: f64) {
        let (w, h) = (image.width() as f64, image.height() as f64);
        self.draw_image_cropped(
            image,
            &ImageCropParams {
                sx: 0.0,
                sy: 0.0,
                s_width: w,
                s_height: h,
                dx,
                dy,
                d_width: w,
                d_height: h,
            },
        );
    }

    /// Copy all of `image` scaled into the `d_width` x `d_height` rect at
    /// `(dx, dy)`.
    pub fn draw_image_scaled(&mut self, image: &Bitmap, dx: f64, dy: f64, d_width: f64, d_height: f64) {
        self.draw_image_cropped(
            image,
            &ImageCropParams {
                sx: 0.0,
                sy: 0.0,
                s_width: image.width() as f64,
                s_height: image.height() as f64,
                dx,
                dy,
                d_width,
                d_height,
            },
        );
    }

    /// Copy the source rect of `image` scaled into the destination rect.
    ///
    /// Destination column `i` (from `floor(dx)`) takes source column
    /// `sx + floor(i * s_width / d_width)`, and likewise for rows. Source
    /// pixels outside `image` copy as transparent.
    pub fn draw_image_cropped(&mut self, image: &Bitmap, params: &ImageCropParams) {
        let ImageCropParams {
            sx,
            sy,
            s_width,
            s_height,
            dx,
            dy,
            d_width,
            d_height,
        } = *params;
        log::debug!(
            target: "canvas",
            "drawImage {} {} {} {} {} {} {} {}",
            sx, sy, s_width, s_height, dx, dy, d_width, d_height
        );
        let all = [sx, sy, s_width, s_height, dx, dy, d_width, d_height];
        if !all.iter().all(|v| v.is_finite()) || d_width <= 0.0 || d_height <= 0.0 {
            return;
        }

        let (sx0, sy0) = (ifloor(sx), ifloor(sy));
        let (dx0, dy0) = (ifloor(dx), ifloor(dy));
        let cols = d_width.ceil() as i64;
        let rows = d_height.ceil() as i64;
        let width = self.width() as i64;
        let height = self.height() as i64;

        let i_range = dx0.saturating_neg().max(0)..cols.min(width.saturating_sub(dx0));
        let j_range = dy0.saturating_neg().max(0)..rows.min(height.saturating_sub(dy0));

        for i in i_range {
            let src_x = sx0.saturating_add(ifloor(i as f64 * s_width / d_width));
            for j in j_range.clone() {
                let src_y = sy0.saturating_add(ifloor(j as f64 * s_height / d_height));
                let rgba = image.get_pixel_rgba(src_x, src_y);
                self.bitmap.set_pixel_rgba(dx0 + i, dy0 + j, rgba);
            }
        }
    }

    /// Copy of the `width` x `height` rect at `(x, y)`. Pixels outside the
    /// bitmap come back transparent.
    pub fn get_image_data(&self, x: i64, y: i64, width: u32, height: u32) -> Bitmap {
        let mut out = Bitmap::new(width, height);
        for j in 0..height as i64 {
            for i in 0..width as i64 {
                out.set_pixel_rgba(i, j, self.bitmap.get_pixel_rgba(x + i, y + j));
            }
        }
        out
    }

    pub fn put_image_data(&mut self, _image: &Bitmap, _x: f64, _y: f64) -> CanvasResult<()> {
        Err(CanvasError::NotYetImplemented("putImageData"))
    }
}
