//! Text rendering for Context.
//!
//! Glyph outlines are replayed through the path API, so text follows the
//! current transform, clip and paint like any other path. Each contour is
//! filled or stroked on its own as soon as it closes.

use std::sync::Arc;

use super::Context;
use crate::drawing_state::{FontSpec, TextAlign, TextBaseline};
use crate::error::{CanvasError, CanvasResult};
use crate::text::{measure, text_origin, GlyphCommand, GlyphOutliner, TextMetrics};

impl Context<'_> {
    /// Set the font from CSS shorthand such as `"28px 'Source Sans Pro'"`.
    pub fn set_font(&mut self, font: &str) -> CanvasResult<()> {
        self.state.font = FontSpec::parse(font)?;
        Ok(())
    }

    pub fn font(&self) -> &FontSpec {
        &self.state.font
    }

    pub fn text_align(&self) -> TextAlign {
        self.state.text_align
    }

    pub fn text_baseline(&self) -> TextBaseline {
        self.state.text_baseline
    }

    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) -> CanvasResult<()> {
        log::debug!(target: "canvas", "fillText '{}' {} {}", text, x, y);
        self.render_text(text, x, y, true)
    }

    pub fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> CanvasResult<()> {
        log::debug!(target: "canvas", "strokeText '{}' {} {}", text, x, y);
        self.render_text(text, x, y, false)
    }

    /// Width, ascent and descent of `text` in the current font.
    pub fn measure_text(&self, text: &str) -> CanvasResult<TextMetrics> {
        let outliner = self.resolve_font()?;
        Ok(measure(outliner.as_ref(), text, self.state.font.size))
    }

    fn resolve_font(&self) -> CanvasResult<Arc<dyn GlyphOutliner>> {
        let family = &self.state.font.family;
        match self.fonts.as_ref().and_then(|fonts| fonts.find(family)) {
            Some(font) => Ok(Arc::clone(&font.outliner)),
            None => {
                log::warn!(target: "canvas", "no font available for family '{}'", family);
                Err(CanvasError::FontNotFound(family.clone()))
            }
        }
    }

    fn render_text(&mut self, text: &str, x: f64, y: f64, fill: bool) -> CanvasResult<()> {
        let outliner = self.resolve_font()?;
        let size = self.state.font.size;
        let metrics = measure(outliner.as_ref(), text, size);
        let origin = text_origin(
            x,
            y,
            self.state.text_align,
            self.state.text_baseline,
            &metrics,
        );
        let commands = outliner.outline(text, origin.x, origin.y, size);

        self.begin_path();
        for cmd in commands {
            match cmd {
                GlyphCommand::MoveTo { x, y } => self.move_to(x, y),
                GlyphCommand::LineTo { x, y } => self.line_to(x, y),
                GlyphCommand::QuadTo { x1, y1, x, y } => self.quadratic_curve_to(x1, y1, x, y),
                GlyphCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => self.bezier_curve_to(x1, y1, x2, y2, x, y),
                GlyphCommand::Close => {
                    self.close_path();
                    if fill {
                        self.fill();
                    } else {
                        self.stroke();
                    }
                    self.begin_path();
                }
            }
        }
        Ok(())
    }
}
