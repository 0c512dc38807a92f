//! Drawing state that can be saved and restored.

use crate::clip_region::ClipRegion;
use crate::color::BLACK;
use crate::error::{CanvasError, CanvasResult};
use crate::gradient::Paint;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Same as `Left`; text is always laid out left to right.
    #[default]
    Start,
    Left,
    /// Same as `Right`.
    End,
    Right,
    Center,
}

impl std::str::FromStr for TextAlign {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(TextAlign::Start),
            "left" => Ok(TextAlign::Left),
            "end" => Ok(TextAlign::End),
            "right" => Ok(TextAlign::Right),
            "center" => Ok(TextAlign::Center),
            _ => Err(CanvasError::InvalidArgument(format!(
                "Invalid text align: '{}'",
                s
            ))),
        }
    }
}

/// Vertical text anchor relative to the `y` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    /// Top of the em box (ascender line).
    Top,
    /// Treated as `Top`.
    Hanging,
    /// Halfway between ascender and descender.
    Middle,
    /// Bottom of the em box (descender line).
    Bottom,
    /// Treated as `Bottom`.
    Ideographic,
}

impl std::str::FromStr for TextBaseline {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetic" => Ok(TextBaseline::Alphabetic),
            "top" => Ok(TextBaseline::Top),
            "hanging" => Ok(TextBaseline::Hanging),
            "middle" => Ok(TextBaseline::Middle),
            "bottom" => Ok(TextBaseline::Bottom),
            "ideographic" => Ok(TextBaseline::Ideographic),
            _ => Err(CanvasError::InvalidArgument(format!(
                "Invalid text baseline: '{}'",
                s
            ))),
        }
    }
}

/// Font selection: family name and size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12.0,
        }
    }
}

impl FontSpec {
    /// Parse `"<size><unit> <family>"`, e.g. `"28px 'Source Sans Pro'"`.
    ///
    /// The size is the leading integer of the first token; its unit is
    /// ignored, so `48pt` is 48 pixels. Quotes around the family are
    /// stripped.
    pub fn parse(s: &str) -> CanvasResult<Self> {
        let s = s.trim();
        let Some((size_token, family)) = s.split_once(char::is_whitespace) else {
            return Err(CanvasError::FontParse(s.to_string()));
        };

        let digits_end = size_token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(size_token.len());
        let size: u32 = size_token[..digits_end]
            .parse()
            .map_err(|_| CanvasError::FontParse(s.to_string()))?;

        let family = family.trim();
        let family = family
            .strip_prefix('\'')
            .and_then(|f| f.strip_suffix('\''))
            .or_else(|| family.strip_prefix('"').and_then(|f| f.strip_suffix('"')))
            .unwrap_or(family);
        if family.is_empty() {
            return Err(CanvasError::FontParse(s.to_string()));
        }

        Ok(Self {
            family: family.to_string(),
            size: size as f64,
        })
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px '{}'", self.size, self.family)
    }
}

/// Everything `save()` snapshots and `restore()` brings back, apart from
/// the transform (kept in its own stack).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    /// Current fill style.
    pub fill: Paint,
    /// Packed stroke color.
    pub stroke_color: u32,
    pub line_width: f64,
    /// Multiplier on source alpha, in `[0, 1]`.
    pub global_alpha: f64,
    pub font: FontSpec,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    /// Anti-aliased fills and strokes when true.
    pub image_smoothing_enabled: bool,
    /// Clipping region (if any), in device space.
    pub clip: Option<ClipRegion>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill: Paint::Solid(BLACK),
            stroke_color: BLACK,
            line_width: 1.0,
            global_alpha: 1.0,
            font: FontSpec::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            image_smoothing_enabled: true,
            clip: None,
        }
    }
}
