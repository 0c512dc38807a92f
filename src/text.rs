//! Text: the glyph-outline seam, the font registry and text layout offsets.
//!
//! Glyph shaping is outside this crate. A [`GlyphOutliner`] turns a string
//! into path commands positioned at an origin; the context replays them
//! through its ordinary path pipeline, filling or stroking each contour as
//! its close command arrives.

use std::sync::Arc;

use crate::basics::Point;
use crate::drawing_state::{TextAlign, TextBaseline};

/// One outline command in canvas pixel coordinates (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    CurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

/// A loaded font able to outline strings.
pub trait GlyphOutliner: Send + Sync {
    /// Outline `text` at `size` pixels with its alphabetic baseline origin
    /// at `(x, y)`.
    fn outline(&self, text: &str, x: f64, y: f64, size: f64) -> Vec<GlyphCommand>;

    /// Sum of glyph advances for `text`, in font units.
    fn advance_width(&self, text: &str) -> f64;

    fn units_per_em(&self) -> f64;

    /// Ascender in font units (positive, above the baseline).
    fn ascender(&self) -> f64;

    /// Descender in font units (usually negative, below the baseline).
    fn descender(&self) -> f64;
}

// ============================================================================
// FontRegistry
// ============================================================================

/// A font registered under a family name.
#[derive(Clone)]
pub struct RegisteredFont {
    pub family: String,
    pub outliner: Arc<dyn GlyphOutliner>,
}

impl std::fmt::Debug for RegisteredFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredFont")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Family name to outliner, in registration order.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: Vec<RegisteredFont>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `outliner` as `family`, replacing an earlier registration
    /// of the same family in place.
    pub fn register(&mut self, family: &str, outliner: Arc<dyn GlyphOutliner>) {
        log::debug!(target: "canvas", "register font '{}'", family);
        match self.fonts.iter_mut().find(|f| f.family == family) {
            Some(existing) => existing.outliner = outliner,
            None => self.fonts.push(RegisteredFont {
                family: family.to_string(),
                outliner,
            }),
        }
    }

    /// The font registered as `family`, or else the first one registered.
    pub fn find(&self, family: &str) -> Option<&RegisteredFont> {
        self.fonts
            .iter()
            .find(|f| f.family == family)
            .or_else(|| self.fonts.first())
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|f| f.family.as_str())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

// ============================================================================
// Metrics and layout
// ============================================================================

/// Text extents in pixels at a given font size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    /// Distance from the baseline up to the ascender line.
    pub ascent: f64,
    /// Font descender scaled to pixels; negative below the baseline.
    pub descent: f64,
}

/// Font-unit metrics of `text` scaled to `size` pixels.
pub fn measure(outliner: &dyn GlyphOutliner, text: &str, size: f64) -> TextMetrics {
    let upm = outliner.units_per_em();
    if upm <= 0.0 || !upm.is_finite() {
        return TextMetrics::default();
    }
    TextMetrics {
        width: outliner.advance_width(text) * size / upm,
        ascent: outliner.ascender() * size / upm,
        descent: outliner.descender() * size / upm,
    }
}

/// Horizontal shift applied to the anchor for `align`.
pub fn align_offset(align: TextAlign, width: f64) -> f64 {
    match align {
        TextAlign::Start | TextAlign::Left => 0.0,
        TextAlign::End | TextAlign::Right => -width,
        TextAlign::Center => -width / 2.0,
    }
}

/// Vertical shift from the anchor `y` to the alphabetic baseline.
pub fn baseline_offset(baseline: TextBaseline, metrics: &TextMetrics) -> f64 {
    match baseline {
        TextBaseline::Alphabetic => 0.0,
        TextBaseline::Top | TextBaseline::Hanging => metrics.ascent,
        TextBaseline::Middle => (metrics.ascent + metrics.descent) / 2.0,
        TextBaseline::Bottom | TextBaseline::Ideographic => metrics.descent,
    }
}

/// Baseline origin for text anchored at `(x, y)`.
pub fn text_origin(
    x: f64,
    y: f64,
    align: TextAlign,
    baseline: TextBaseline,
    metrics: &TextMetrics,
) -> Point {
    Point::new(
        x + align_offset(align, metrics.width),
        y + baseline_offset(baseline, metrics),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Each character is a solid box 0.4em wide and 0.7em tall standing on
    /// the baseline, advancing 0.5em.
    pub(crate) struct BoxFont;

    impl GlyphOutliner for BoxFont {
        fn outline(&self, text: &str, x: f64, y: f64, size: f64) -> Vec<GlyphCommand> {
            let mut cmds = Vec::new();
            for (i, _) in text.chars().enumerate() {
                let x0 = x + i as f64 * size * 0.5;
                let x1 = x0 + size * 0.4;
                let top = y - size * 0.7;
                cmds.push(GlyphCommand::MoveTo { x: x0, y: top });
                cmds.push(GlyphCommand::LineTo { x: x1, y: top });
                cmds.push(GlyphCommand::LineTo { x: x1, y });
                cmds.push(GlyphCommand::LineTo { x: x0, y });
                cmds.push(GlyphCommand::Close);
            }
            cmds
        }

        fn advance_width(&self, text: &str) -> f64 {
            text.chars().count() as f64 * 500.0
        }

        fn units_per_em(&self) -> f64 {
            1000.0
        }

        fn ascender(&self) -> f64 {
            800.0
        }

        fn descender(&self) -> f64 {
            -200.0
        }
    }

    #[test]
    fn test_measure() {
        let m = measure(&BoxFont, "abcd", 20.0);
        assert_eq!(m.width, 40.0);
        assert_eq!(m.ascent, 16.0);
        assert_eq!(m.descent, -4.0);
    }

    #[test]
    fn test_registry_fallback_to_first() {
        let mut reg = FontRegistry::new();
        assert!(reg.find("Any").is_none());
        reg.register("Box", Arc::new(BoxFont));
        reg.register("Other", Arc::new(BoxFont));
        assert_eq!(reg.find("Other").unwrap().family, "Other");
        assert_eq!(reg.find("Missing").unwrap().family, "Box");
        reg.register("Box", Arc::new(BoxFont));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.families().collect::<Vec<_>>(), vec!["Box", "Other"]);
    }

    #[test]
    fn test_align_offsets() {
        assert_eq!(align_offset(TextAlign::Start, 40.0), 0.0);
        assert_eq!(align_offset(TextAlign::Left, 40.0), 0.0);
        assert_eq!(align_offset(TextAlign::End, 40.0), -40.0);
        assert_eq!(align_offset(TextAlign::Right, 40.0), -40.0);
        assert_eq!(align_offset(TextAlign::Center, 40.0), -20.0);
    }

    #[test]
    fn test_baseline_offsets() {
        let m = TextMetrics {
            width: 10.0,
            ascent: 47.0,
            descent: -13.0,
        };
        assert_eq!(baseline_offset(TextBaseline::Alphabetic, &m), 0.0);
        assert_eq!(baseline_offset(TextBaseline::Top, &m), 47.0);
        assert_eq!(baseline_offset(TextBaseline::Hanging, &m), 47.0);
        assert_eq!(baseline_offset(TextBaseline::Middle, &m), 17.0);
        assert_eq!(baseline_offset(TextBaseline::Bottom, &m), -13.0);
        assert_eq!(
            text_origin(50.0, 50.0, TextAlign::Center, TextBaseline::Bottom, &m),
            Point::new(45.0, 37.0)
        );
    }
}
