//! Integration tests for raster-canvas.

use std::sync::Arc;

use raster_canvas::color::{color_string_to_u32, pack_rgba, unpack_rgba};
use raster_canvas::{
    make, ArcParams, Bitmap, BitmapOptions, CanvasError, Context, FontRegistry, GlyphCommand,
    GlyphOutliner, ImageCropParams, Paint, RadialGradientParams, TextAlign, TextBaseline,
};
use rstest::rstest;

const RED: u32 = 0xFF00_00FF;
const GREEN: u32 = 0x00FF_00FF;
const BLUE: u32 = 0x0000_FFFF;
const WHITE: u32 = 0xFFFF_FFFF;

fn count_painted(b: &Bitmap) -> usize {
    b.data().chunks(4).filter(|p| p[3] != 0).count()
}

/// Test filling a square path and reading back interior and exterior pixels.
#[test]
fn test_fill_square_path() {
    let mut bitmap = make(200, 200, None);
    {
        let mut ctx = bitmap.context();
        ctx.set_fill_style("red").unwrap();
        ctx.begin_path();
        ctx.move_to(10.0, 10.0);
        ctx.line_to(100.0, 10.0);
        ctx.line_to(100.0, 100.0);
        ctx.line_to(10.0, 100.0);
        ctx.close_path();
        ctx.fill();
    }
    assert_eq!(bitmap.get_pixel_rgba(50, 50), RED);
    assert_eq!(bitmap.get_pixel_rgba(0, 0), 0);
    assert_eq!(bitmap.get_pixel_rgba(150, 150), 0);
}

/// Test a one-pixel non-anti-aliased stroke.
#[test]
fn test_stroke_line_no_aa() {
    let mut bitmap = Bitmap::new(20, 20);
    {
        let mut ctx = bitmap.context();
        ctx.set_image_smoothing_enabled(false);
        ctx.set_stroke_style("#FF0000").unwrap();
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(10.0, 0.0);
        ctx.stroke();
    }
    for x in 0..=10 {
        assert_eq!(bitmap.get_pixel_rgba(x, 0), RED, "pixel ({}, 0)", x);
    }
    assert_eq!(bitmap.get_pixel_rgba(0, 1), 0);
}

/// Test an anti-aliased diagonal stroke leaves partially covered pixels.
#[test]
fn test_stroke_line_aa() {
    let mut bitmap = Bitmap::new(50, 50);
    {
        let mut ctx = bitmap.context();
        ctx.set_stroke_color(BLUE);
        ctx.set_line_width(3.0);
        ctx.move_to(5.0, 5.0);
        ctx.line_to(45.0, 25.0);
        ctx.stroke();
    }
    let alphas: Vec<u8> = bitmap.data().chunks(4).map(|p| p[3]).collect();
    assert!(alphas.iter().any(|&a| a == 255));
    assert!(alphas.iter().any(|&a| a > 0 && a < 255));
    assert_eq!(bitmap.get_pixel_rgba(5, 40), 0);
}

/// Test filling twice gives the same result as filling once.
#[test]
fn test_fill_is_idempotent() {
    let draw = |times: usize| {
        let mut bitmap = Bitmap::new(64, 64);
        {
            let mut ctx = bitmap.context();
            ctx.set_fill_color(GREEN);
            ctx.move_to(32.0, 4.0);
            ctx.line_to(60.0, 50.0);
            ctx.line_to(4.0, 58.0);
            for _ in 0..times {
                ctx.fill();
            }
        }
        bitmap
    };
    assert_eq!(draw(1), draw(2));
}

/// Test fill rect over a transparent bitmap yields the exact color.
#[test]
fn test_fill_rect_opaque() {
    let mut bitmap = Bitmap::new(30, 30);
    {
        let mut ctx = bitmap.context();
        ctx.set_fill_style("rgb(12, 34, 56)").unwrap();
        ctx.fill_rect(5.0, 5.0, 20.0, 20.0);
    }
    assert_eq!(unpack_rgba(bitmap.get_pixel_rgba(15, 15)), [12, 34, 56, 255]);
    assert_eq!(count_painted(&bitmap), 400);
}

/// Test global alpha blends and keeps the larger alpha.
#[test]
fn test_global_alpha_composite() {
    let mut bitmap = Bitmap::with_options(4, 4, &BitmapOptions { background: Some(WHITE) });
    {
        let mut ctx = bitmap.context();
        ctx.set_fill_color(RED);
        ctx.set_global_alpha(0.5);
        ctx.fill_rect(0.0, 0.0, 4.0, 4.0);
    }
    assert_eq!(bitmap.get_pixel_rgba(1, 1), 0xFF80_80FF);
}

/// Test semi-transparent paint over transparent pixels keeps its own alpha.
#[test]
fn test_alpha_is_max_of_layers() {
    let mut bitmap = Bitmap::new(2, 2);
    {
        let mut ctx = bitmap.context();
        ctx.set_fill_style("rgba(0, 0, 255, 0.5)").unwrap();
        ctx.fill_rect(0.0, 0.0, 2.0, 2.0);
        ctx.fill_rect(0.0, 0.0, 2.0, 2.0);
    }
    // Two half-opaque layers stay at the alpha of one.
    assert_eq!(unpack_rgba(bitmap.get_pixel_rgba(0, 0))[3], 127);
}

/// Test save/restore brings back styles and the clip.
#[test]
fn test_save_restore_state() {
    let mut bitmap = Bitmap::new(40, 40);
    {
        let mut ctx = bitmap.context();
        ctx.set_fill_style("#ff0000").unwrap();
        ctx.set_line_width(5.0);

        ctx.save();
        ctx.set_fill_style("#00ff00").unwrap();
        ctx.set_line_width(10.0);
        ctx.move_to(0.0, 0.0);
        ctx.line_to(10.0, 0.0);
        ctx.line_to(10.0, 10.0);
        ctx.line_to(0.0, 10.0);
        ctx.clip();
        ctx.begin_path();
        ctx.fill_rect(0.0, 0.0, 40.0, 40.0);
        ctx.restore();

        assert_eq!(ctx.line_width(), 5.0);
        assert_eq!(ctx.fill_paint(), &Paint::Solid(RED));
        assert!(ctx.state().clip.is_none());
        ctx.fill_rect(20.0, 20.0, 10.0, 10.0);
    }
    assert_eq!(bitmap.get_pixel_rgba(5, 5), GREEN);
    assert_eq!(bitmap.get_pixel_rgba(15, 15), 0);
    assert_eq!(bitmap.get_pixel_rgba(25, 25), RED);
}

/// Test nested transforms round-trip through save/restore.
#[test]
fn test_transform_round_trip() {
    let mut bitmap = Bitmap::new(10, 10);
    let mut ctx = bitmap.context();
    ctx.translate(1.5, -2.0);
    let before = ctx.get_transform();
    for depth in 1..=10 {
        for _ in 0..depth {
            ctx.save();
            ctx.rotate(0.7);
            ctx.scale(1.1, 0.9);
            ctx.translate(3.0, 4.0);
        }
        for _ in 0..depth {
            ctx.restore();
        }
        assert_eq!(ctx.get_transform(), before);
    }
}

/// Test a rotated square fill lands where the transform puts it.
#[test]
fn test_transformed_fill() {
    let mut bitmap = Bitmap::new(100, 100);
    {
        let mut ctx = bitmap.context();
        ctx.translate(50.0, 50.0);
        ctx.rotate(std::f64::consts::FRAC_PI_4);
        ctx.move_to(-10.0, -10.0);
        ctx.line_to(10.0, -10.0);
        ctx.line_to(10.0, 10.0);
        ctx.line_to(-10.0, 10.0);
        ctx.fill();
    }
    assert_eq!(bitmap.get_pixel_rgba(50, 50), 0x0000_00FF);
    // The diamond reaches about 14px along the axes, not into the corners.
    assert_eq!(bitmap.get_pixel_rgba(50, 38), 0x0000_00FF);
    assert_eq!(bitmap.get_pixel_rgba(41, 41), 0);
}

/// Test pixel access outside the bitmap.
#[rstest]
#[case(-1, 0)]
#[case(0, -1)]
#[case(10, 0)]
#[case(0, 10)]
#[case(i64::MIN, i64::MAX)]
fn test_out_of_range_pixels(#[case] x: i64, #[case] y: i64) {
    let mut bitmap = Bitmap::new(10, 10);
    bitmap.fill(WHITE);
    let before = bitmap.clone();
    assert_eq!(bitmap.get_pixel_rgba(x, y), 0);
    bitmap.set_pixel_rgba(x, y, RED);
    assert_eq!(bitmap, before);
}

/// 50x50 image with a distinct color per pixel.
fn gradient_image() -> Bitmap {
    let mut img = Bitmap::new(50, 50);
    for y in 0..50 {
        for x in 0..50 {
            img.set_pixel_rgba(x, y, pack_rgba(x as u8 * 5, y as u8 * 5, 100, 255));
        }
    }
    img
}

/// Test crop+scale drawImage reproduces each source pixel as a 4x4 block.
#[test]
fn test_draw_image_scale_up_blocks() {
    let img = gradient_image();
    let mut bitmap = Bitmap::new(200, 200);
    {
        let mut ctx = bitmap.context();
        ctx.draw_image_cropped(
            &img,
            &ImageCropParams {
                sx: 0.0,
                sy: 0.0,
                s_width: 50.0,
                s_height: 50.0,
                dx: 0.0,
                dy: 0.0,
                d_width: 200.0,
                d_height: 200.0,
            },
        );
    }
    for &(sx, sy) in &[(0, 0), (7, 3), (25, 25), (49, 49), (10, 42)] {
        let expected = img.get_pixel_rgba(sx, sy);
        for dy in 0..4 {
            for dx in 0..4 {
                assert_eq!(bitmap.get_pixel_rgba(sx * 4 + dx, sy * 4 + dy), expected);
            }
        }
    }
}

/// Test every drawImage arity places the same top-left source pixel.
#[rstest]
#[case::position(0)]
#[case::scaled(1)]
#[case::cropped(2)]
fn test_draw_image_arities(#[case] arity: usize) {
    let img = gradient_image();
    let mut bitmap = Bitmap::new(100, 100);
    {
        let mut ctx = bitmap.context();
        match arity {
            0 => ctx.draw_image(&img, 10.0, 20.0),
            1 => ctx.draw_image_scaled(&img, 10.0, 20.0, 25.0, 25.0),
            _ => ctx.draw_image_cropped(
                &img,
                &ImageCropParams {
                    sx: 0.0,
                    sy: 0.0,
                    s_width: 10.0,
                    s_height: 10.0,
                    dx: 10.0,
                    dy: 20.0,
                    d_width: 30.0,
                    d_height: 30.0,
                },
            ),
        }
    }
    assert_eq!(bitmap.get_pixel_rgba(10, 20), img.get_pixel_rgba(0, 0));
    assert_eq!(bitmap.get_pixel_rgba(9, 20), 0);
    assert_eq!(bitmap.get_pixel_rgba(10, 19), 0);
}

/// Test linear gradient fill through fill_rect.
#[test]
fn test_linear_gradient_fill() {
    let mut bitmap = Bitmap::new(20, 20);
    {
        let mut ctx = bitmap.context();
        let mut g = ctx.create_linear_gradient(0.0, 0.0, 20.0, 20.0);
        g.add_color_stop(0.0, WHITE);
        g.add_color_stop(1.0, BLUE);
        ctx.set_fill_paint(g);
        ctx.fill_rect(0.0, 0.0, 20.0, 20.0);
    }
    assert_eq!(bitmap.get_pixel_rgba(0, 0), WHITE);
    assert_eq!(bitmap.get_pixel_rgba(19, 19), 0x0C0C_FFFF);
}

/// Test radial gradient fill through a path.
#[test]
fn test_radial_gradient_fill() {
    let mut bitmap = Bitmap::new(40, 40);
    {
        let mut ctx = bitmap.context();
        let mut g = ctx.create_radial_gradient(&RadialGradientParams {
            x0: 20.0,
            y0: 20.0,
            r0: 0.0,
            x1: 20.0,
            y1: 20.0,
            r1: 10.0,
        });
        g.add_color_stop(0.0, RED);
        g.add_color_stop(1.0, BLUE);
        ctx.set_fill_paint(g);
        ctx.set_image_smoothing_enabled(false);
        ctx.arc(&ArcParams {
            x: 20.0,
            y: 20.0,
            radius: 15.0,
            start_angle: 0.0,
            end_angle: 2.0 * std::f64::consts::PI,
            anticlockwise: false,
        });
        ctx.fill();
    }
    assert_eq!(bitmap.get_pixel_rgba(20, 20), RED);
    assert_eq!(bitmap.get_pixel_rgba(32, 20), BLUE);
    assert_eq!(bitmap.get_pixel_rgba(0, 0), 0);
}

/// Test color parsing properties.
#[rstest]
#[case("#FFFFFF", [255, 255, 255, 255])]
#[case("#fff", [255, 255, 255, 255])]
#[case("rgba(0,25,234,0.6)", [0, 25, 234, 153])]
#[case("rgb(1, 2, 3)", [1, 2, 3, 255])]
#[case("green", [0, 255, 0, 255])]
fn test_color_strings(#[case] input: &str, #[case] bytes: [u8; 4]) {
    assert_eq!(unpack_rgba(color_string_to_u32(input).unwrap()), bytes);
}

#[test]
fn test_unknown_color() {
    assert!(matches!(
        color_string_to_u32("not-a-color"),
        Err(CanvasError::UnknownColorFormat(_))
    ));
}

/// Test unimplemented operations report their errors.
#[test]
fn test_unsupported_operations() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut ctx = bitmap.context();
    assert!(matches!(ctx.rect(0.0, 0.0, 1.0, 1.0), Err(CanvasError::NotSupported(_))));
    assert!(matches!(
        ctx.arc_to(0.0, 0.0, 1.0, 1.0, 2.0),
        Err(CanvasError::NotSupported(_))
    ));
    let err = ctx
        .ellipse(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, false)
        .unwrap_err();
    assert_eq!(err.to_string(), "ellipse is not supported");
    let img = Bitmap::new(1, 1);
    assert!(matches!(
        ctx.put_image_data(&img, 0.0, 0.0),
        Err(CanvasError::NotYetImplemented(_))
    ));
}

/// Test degenerate geometry draws nothing and never panics.
#[test]
fn test_degenerate_geometry() {
    let mut bitmap = Bitmap::new(10, 10);
    {
        let mut ctx = bitmap.context();
        ctx.fill();
        ctx.stroke();
        ctx.move_to(5.0, 5.0);
        ctx.line_to(5.0, 5.0);
        ctx.fill();
        ctx.begin_path();
        ctx.move_to(f64::NAN, 0.0);
        ctx.line_to(3.0, f64::INFINITY);
        ctx.fill();
        ctx.stroke();
        ctx.fill_rect(0.0, 0.0, 0.0, 10.0);
        ctx.scale(0.0, 0.0);
        ctx.begin_path();
        ctx.move_to(1.0, 1.0);
        ctx.line_to(9.0, 9.0);
        ctx.line_to(1.0, 9.0);
        ctx.fill();
    }
    assert!(count_painted(&bitmap) <= 1);
}

// ============================================================================
// Text
// ============================================================================

/// Outliner drawing each character as a square of side `size / 2` on the
/// baseline, advancing `size`.
struct SquareFont;

impl GlyphOutliner for SquareFont {
    fn outline(&self, text: &str, x: f64, y: f64, size: f64) -> Vec<GlyphCommand> {
        text.chars()
            .enumerate()
            .flat_map(|(i, _)| {
                let x0 = x + i as f64 * size;
                let x1 = x0 + size / 2.0;
                let top = y - size / 2.0;
                [
                    GlyphCommand::MoveTo { x: x0, y: top },
                    GlyphCommand::QuadTo {
                        x1: (x0 + x1) / 2.0,
                        y1: top,
                        x: x1,
                        y: top,
                    },
                    GlyphCommand::LineTo { x: x1, y },
                    GlyphCommand::LineTo { x: x0, y },
                    GlyphCommand::Close,
                ]
            })
            .collect()
    }

    fn advance_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * 2048.0
    }

    fn units_per_em(&self) -> f64 {
        2048.0
    }

    fn ascender(&self) -> f64 {
        1536.0
    }

    fn descender(&self) -> f64 {
        -512.0
    }
}

fn fonts() -> Arc<FontRegistry> {
    let mut reg = FontRegistry::new();
    reg.register("Square", Arc::new(SquareFont));
    Arc::new(reg)
}

#[test]
fn test_measure_text() {
    let mut bitmap = Bitmap::new(10, 10);
    let mut ctx = Context::with_fonts(&mut bitmap, fonts());
    ctx.set_font("32px 'Square'").unwrap();
    let m = ctx.measure_text("abc").unwrap();
    assert_eq!(m.width, 96.0);
    assert_eq!(m.ascent, 24.0);
    assert_eq!(m.descent, -8.0);
}

#[test]
fn test_fill_text_centered_middle() {
    let mut bitmap = Bitmap::new(100, 100);
    {
        let mut ctx = Context::with_fonts(&mut bitmap, fonts());
        ctx.set_font("20px Square").unwrap();
        ctx.set_fill_color(RED);
        ctx.set_image_smoothing_enabled(false);
        ctx.set_text_align(TextAlign::Center);
        ctx.set_text_baseline(TextBaseline::Middle);
        // Width 20, ascent 15, descent -5: origin (40, 55), square x 40..50,
        // y 45..55.
        ctx.fill_text("a", 50.0, 50.0).unwrap();
    }
    assert_eq!(bitmap.get_pixel_rgba(45, 50), RED);
    assert_eq!(bitmap.get_pixel_rgba(45, 40), 0);
    assert_eq!(bitmap.get_pixel_rgba(55, 50), 0);
}

#[test]
fn test_text_follows_transform() {
    let mut bitmap = Bitmap::new(100, 100);
    {
        let mut ctx = Context::with_fonts(&mut bitmap, fonts());
        ctx.set_font("20px Square").unwrap();
        ctx.set_image_smoothing_enabled(false);
        ctx.translate(30.0, 0.0);
        ctx.fill_text("a", 0.0, 50.0).unwrap();
    }
    assert_eq!(bitmap.get_pixel_rgba(35, 45), 0x0000_00FF);
    assert_eq!(bitmap.get_pixel_rgba(5, 45), 0);
}

#[test]
fn test_text_without_registry() {
    let mut bitmap = Bitmap::new(10, 10);
    let mut ctx = bitmap.context();
    assert!(matches!(
        ctx.stroke_text("x", 0.0, 0.0),
        Err(CanvasError::FontNotFound(_))
    ));
}

// ============================================================================
// Codec
// ============================================================================

#[cfg(feature = "codec")]
mod codec {
    use super::*;
    use raster_canvas::codec::{decode_png, encode_jpeg, encode_png};

    #[test]
    fn test_png_round_trip_after_drawing() {
        let mut bitmap = Bitmap::new(32, 24);
        {
            let mut ctx = bitmap.context();
            ctx.set_fill_style("rgba(10, 200, 30, 0.5)").unwrap();
            ctx.fill_rect(2.0, 2.0, 20.0, 10.0);
            ctx.set_stroke_color(BLUE);
            ctx.move_to(0.0, 20.0);
            ctx.line_to(31.0, 3.0);
            ctx.stroke();
        }
        let mut png = Vec::new();
        encode_png(&bitmap, &mut png).unwrap();
        let decoded = decode_png(png.as_slice()).unwrap();
        assert_eq!(decoded, bitmap);
    }

    #[test]
    fn test_jpeg_starts_with_soi() {
        let bitmap = make(8, 8, Some(&BitmapOptions { background: Some(RED) }));
        let mut jpeg = Vec::new();
        encode_jpeg(&bitmap, &mut jpeg, Some(75)).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }
}
