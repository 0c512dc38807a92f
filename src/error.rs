//! Error types for raster-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors surfaced by parsing, codec and unimplemented canvas operations.
///
/// Geometry and rasterization never produce an error: degenerate input draws
/// nothing and out-of-range pixels are skipped.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Malformed bitmap data handed to a constructor or encoder.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Color string that is neither hex, rgb(), rgba() nor a known name.
    #[error("Unknown color format: {0}")]
    UnknownColorFormat(String),

    /// Canvas path primitive with no implementation (arcTo, rect, ellipse).
    #[error("{0} is not supported")]
    NotSupported(&'static str),

    /// Canvas operation reserved for later work.
    #[error("{0} is not yet implemented")]
    NotYetImplemented(&'static str),

    /// Malformed CSS font shorthand.
    #[error("Failed to parse font string: {0}")]
    FontParse(String),

    /// Text drawn with no font registered on the context.
    #[error("No font registered for family: {0}")]
    FontNotFound(String),

    /// Font binary that could not be parsed.
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG/JPEG encode or decode failure.
    #[cfg(feature = "codec")]
    #[error("Codec error: {0}")]
    Codec(#[from] image::ImageError),
}
