//! TrueType font engine using `ttf-parser`.
//!
//! Implements [`GlyphOutliner`] for TTF/OTF binaries: glyph outlines are
//! scaled from font units to pixels, flipped to y-down and laid out along
//! the baseline with horizontal advances and `kern` table kerning.

use std::path::Path;
use std::sync::Arc;

use crate::error::{CanvasError, CanvasResult};
use crate::text::{FontRegistry, GlyphCommand, GlyphOutliner};

/// A parsed TrueType/OpenType face.
///
/// Holds the raw bytes and re-parses the face table directory on each
/// call; parsing is lazy in `ttf-parser` and cheap.
pub struct FontEngine {
    face_data: Vec<u8>,
    face_index: u32,
    units_per_em: f64,
    ascender: f64,
    descender: f64,
}

impl FontEngine {
    /// Load a face from raw TTF/OTF data.
    ///
    /// `face_index` selects the face in a font collection (0 for single fonts).
    pub fn from_data(data: Vec<u8>, face_index: u32) -> CanvasResult<Self> {
        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| CanvasError::FontLoad(format!("{:?}", e)))?;
        let units_per_em = face.units_per_em() as f64;
        let ascender = face.ascender() as f64;
        let descender = face.descender() as f64;
        Ok(Self {
            face_data: data,
            face_index,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// Read and load a font file.
    pub fn from_file(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_data(data, 0)
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.face_data, self.face_index).ok()
    }

    /// Kerning between two glyphs in font units, 0 without kern data.
    fn kerning(face: &ttf_parser::Face<'_>, first: ttf_parser::GlyphId, second: ttf_parser::GlyphId) -> f64 {
        if let Some(kern) = face.tables().kern {
            for subtable in kern.subtables {
                if subtable.horizontal && !subtable.has_cross_stream {
                    if let Some(value) = subtable.glyphs_kerning(first, second) {
                        return value as f64;
                    }
                }
            }
        }
        0.0
    }

    /// Walk the glyphs of `text`, calling `f(face, glyph, pen_x)` with the
    /// pen position in font units. Returns the final pen position.
    fn layout<F>(&self, text: &str, mut f: F) -> f64
    where
        F: FnMut(&ttf_parser::Face<'_>, ttf_parser::GlyphId, f64),
    {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let mut pen = 0.0;
        let mut prev: Option<ttf_parser::GlyphId> = None;
        for ch in text.chars() {
            // Unmapped characters render as .notdef.
            let glyph = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
            if let Some(prev) = prev {
                pen += Self::kerning(&face, prev, glyph);
            }
            f(&face, glyph, pen);
            pen += face.glyph_hor_advance(glyph).unwrap_or(0) as f64;
            prev = Some(glyph);
        }
        pen
    }
}

impl GlyphOutliner for FontEngine {
    fn outline(&self, text: &str, x: f64, y: f64, size: f64) -> Vec<GlyphCommand> {
        let scale = size / self.units_per_em;
        let mut collector = OutlineCollector::new(scale);
        self.layout(text, |face, glyph, pen| {
            collector.origin = (x + pen * scale, y);
            face.outline_glyph(glyph, &mut collector);
        });
        collector.commands
    }

    fn advance_width(&self, text: &str) -> f64 {
        self.layout(text, |_, _, _| {})
    }

    fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    fn ascender(&self) -> f64 {
        self.ascender
    }

    fn descender(&self) -> f64 {
        self.descender
    }
}

/// Load the font file at `path` and register it as `family`.
pub fn register_file(registry: &mut FontRegistry, path: impl AsRef<Path>, family: &str) -> CanvasResult<()> {
    let engine = FontEngine::from_file(path)?;
    registry.register(family, Arc::new(engine));
    Ok(())
}

// ============================================================================
// OutlineCollector: implements ttf_parser::OutlineBuilder
// ============================================================================

/// Collects one glyph at a time into canvas-space commands.
struct OutlineCollector {
    commands: Vec<GlyphCommand>,
    scale: f64,
    /// Baseline origin of the glyph being outlined.
    origin: (f64, f64),
}

impl OutlineCollector {
    fn new(scale: f64) -> Self {
        Self {
            commands: Vec::with_capacity(64),
            scale,
            origin: (0.0, 0.0),
        }
    }

    #[inline]
    fn sx(&self, v: f32) -> f64 {
        self.origin.0 + v as f64 * self.scale
    }

    /// Font units point up; canvas y points down.
    #[inline]
    fn sy(&self, v: f32) -> f64 {
        self.origin.1 - v as f64 * self.scale
    }
}

impl ttf_parser::OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let cmd = GlyphCommand::MoveTo {
            x: self.sx(x),
            y: self.sy(y),
        };
        self.commands.push(cmd);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let cmd = GlyphCommand::LineTo {
            x: self.sx(x),
            y: self.sy(y),
        };
        self.commands.push(cmd);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let cmd = GlyphCommand::QuadTo {
            x1: self.sx(x1),
            y1: self.sy(y1),
            x: self.sx(x),
            y: self.sy(y),
        };
        self.commands.push(cmd);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let cmd = GlyphCommand::CurveTo {
            x1: self.sx(x1),
            y1: self.sy(y1),
            x2: self.sx(x2),
            y2: self.sy(y2),
            x: self.sx(x),
            y: self.sy(y),
        };
        self.commands.push(cmd);
    }

    fn close(&mut self) {
        self.commands.push(GlyphCommand::Close);
    }
}

// ============================================================================
// Tests
// ============================================================================
