//! PNG and JPEG encoding and decoding of [`Bitmap`]s via the `image` crate.

use std::io::{Read, Write};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::bitmap::Bitmap;
use crate::error::{CanvasError, CanvasResult};

/// JPEG quality used when the caller does not pick one.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

fn check_not_empty(bitmap: &Bitmap) -> CanvasResult<()> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(CanvasError::InvalidArgument(format!(
            "cannot encode a {}x{} bitmap",
            bitmap.width(),
            bitmap.height()
        )));
    }
    Ok(())
}

/// Write `bitmap` as an RGBA PNG.
pub fn encode_png<W: Write>(bitmap: &Bitmap, out: W) -> CanvasResult<()> {
    check_not_empty(bitmap)?;
    log::debug!(target: "canvas", "encode png {}x{}", bitmap.width(), bitmap.height());
    PngEncoder::new(out).write_image(
        bitmap.data(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// Write `bitmap` as a baseline JPEG. Alpha is dropped.
///
/// `quality` defaults to [`DEFAULT_JPEG_QUALITY`] and is clamped to `1..=100`.
pub fn encode_jpeg<W: Write>(bitmap: &Bitmap, out: W, quality: Option<u8>) -> CanvasResult<()> {
    check_not_empty(bitmap)?;
    let quality = quality.unwrap_or(DEFAULT_JPEG_QUALITY).clamp(1, 100);
    log::debug!(
        target: "canvas",
        "encode jpeg {}x{} q{}",
        bitmap.width(),
        bitmap.height(),
        quality
    );
    let rgb: Vec<u8> = bitmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    JpegEncoder::new_with_quality(out, quality).write_image(
        &rgb,
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

fn decode<R: Read>(mut input: R, format: ImageFormat) -> CanvasResult<Bitmap> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let img = image::load_from_memory_with_format(&bytes, format)?.to_rgba8();
    let (width, height) = img.dimensions();
    Bitmap::from_raw(width, height, img.into_raw())
}

/// Read a PNG into a new bitmap.
pub fn decode_png<R: Read>(input: R) -> CanvasResult<Bitmap> {
    decode(input, ImageFormat::Png)
}

/// Read a JPEG into a new, fully opaque bitmap.
pub fn decode_jpeg<R: Read>(input: R) -> CanvasResult<Bitmap> {
    decode(input, ImageFormat::Jpeg)
}
