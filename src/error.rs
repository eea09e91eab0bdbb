//! Error types for font loading, rasterization, and batch export.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a rasterized glyph.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The font resource could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The font file was readable but could not be parsed.
    #[error("failed to parse font data from '{}'", .0.display())]
    FontLoad(PathBuf),

    /// The font has no glyph mapped for the requested character.
    #[error("font has no glyph for {0:?}")]
    MissingGlyph(char),
}

/// Failure of a batch export.
///
/// Any rasterization failure is fatal for the whole batch; there is no
/// partial-success mode.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Rasterization failed for one of the requested characters.
    #[error("failed to rasterize {ch:?}")]
    Rasterize {
        /// The character whose rasterization failed.
        ch: char,
        /// The underlying rasterizer failure.
        source: RasterError,
    },
}
