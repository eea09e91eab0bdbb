//! The narrow interface between the export pipeline and a font rasterizer.

use crate::error::RasterError;

/// A rasterizer's per-glyph output: a packed monochrome bitmap plus metrics.
///
/// The buffer layout is the packed format accepted by
/// [`unpack_mono_bitmap`](crate::unpack_mono_bitmap): `rows` scanlines of
/// `pitch` bytes each, pixels MSB-first, rows padded to a whole byte.
///
/// The slot borrows the rasterizer's working buffer, which is reused for the
/// next glyph; the pixel data must therefore be copied out (see
/// [`Glyph::from_slot`](crate::Glyph::from_slot)) before another character is
/// rasterized. The borrow makes this ordering a compile-time guarantee.
#[derive(Clone, Copy, Debug)]
pub struct GlyphSlot<'a> {
    /// Packed bitmap bytes; at least `pitch * rows` long.
    pub buffer: &'a [u8],
    /// Bytes per packed row; at least `ceil(width / 8)`.
    pub pitch: usize,
    /// Number of scanlines.
    pub rows: usize,
    /// Width of a scanline in pixels.
    pub width: usize,
    /// Top-side bearing: distance from the baseline to the topmost scanline,
    /// in pixels. Negative for glyphs rendered entirely below the baseline.
    pub top: i32,
}

/// A source of rasterized monochrome glyphs for single characters.
///
/// Implementations may keep internal scratch state across calls (a real font
/// engine reuses one glyph-slot buffer), which is why rasterization takes
/// `&mut self` and the returned slot borrows the rasterizer.
pub trait Rasterizer {
    /// Rasterizes the glyph for `ch` at the rasterizer's configured pixel
    /// size.
    ///
    /// A character without visible pixels (e.g. whitespace) yields a
    /// zero-size slot, not an error.
    ///
    /// # Errors
    ///
    /// Fails when the font cannot render the requested character.
    fn rasterize(&mut self, ch: char) -> Result<GlyphSlot<'_>, RasterError>;
}
