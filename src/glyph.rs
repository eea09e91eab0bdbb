//! A single extracted glyph: unpacked bitmap, source character, and metrics.

use crate::bitmap::{unpack_mono_bitmap, Bitmap};
use crate::raster::GlyphSlot;

/// One character's rasterized image and vertical metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// The unpacked monochrome image.
    pub bitmap: Bitmap,
    /// The character this glyph was requested for. Kept verbatim even when
    /// the rasterizer substituted a fallback image internally.
    pub ch: char,
    /// Top-side bearing: baseline-to-top-scanline distance in pixels.
    pub top: i32,
}

impl Glyph {
    /// Builds a `Glyph` from a rasterizer's glyph slot, copying all pixel
    /// data out of the slot's packed buffer.
    #[must_use]
    pub fn from_slot(slot: &GlyphSlot<'_>, ch: char) -> Self {
        let pixels = unpack_mono_bitmap(slot.buffer, slot.pitch, slot.rows, slot.width);
        Glyph {
            bitmap: Bitmap::new(slot.width, slot.rows, pixels),
            ch,
            top: slot.top,
        }
    }

    /// Width of the glyph bitmap in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.bitmap.width
    }

    /// Height of the glyph bitmap in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.bitmap.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slot_unpacks_pixels() {
        let packed = [0b1010_0000, 0b0100_0000];
        let slot = GlyphSlot {
            buffer: &packed,
            pitch: 1,
            rows: 2,
            width: 3,
            top: 5,
        };
        let glyph = Glyph::from_slot(&slot, 'x');
        assert_eq!(glyph.ch, 'x');
        assert_eq!(glyph.top, 5);
        assert_eq!(glyph.width(), 3);
        assert_eq!(glyph.height(), 2);
        assert_eq!(glyph.bitmap.pixels, [1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn zero_size_slot_yields_empty_glyph() {
        // Whitespace characters typically rasterize to no pixels at all.
        let slot = GlyphSlot {
            buffer: &[],
            pitch: 0,
            rows: 0,
            width: 0,
            top: 0,
        };
        let glyph = Glyph::from_slot(&slot, ' ');
        assert_eq!(glyph.width(), 0);
        assert_eq!(glyph.height(), 0);
        assert!(glyph.bitmap.pixels.is_empty());
    }

    #[test]
    fn negative_top_bearing_is_preserved() {
        let slot = GlyphSlot {
            buffer: &[0xFF],
            pitch: 1,
            rows: 1,
            width: 8,
            top: -2,
        };
        assert_eq!(Glyph::from_slot(&slot, '_').top, -2);
    }
}
