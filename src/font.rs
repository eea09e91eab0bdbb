//! Real [`Rasterizer`] implementation over `rusttype`.

use std::path::Path;

use rusttype::{Font, Scale};

use crate::error::RasterError;
use crate::raster::{GlyphSlot, Rasterizer};

/// Rasterizes single characters of one font at a fixed pixel size into
/// packed monochrome bitmaps.
///
/// The packed output is produced in an internal scratch buffer that is
/// reused across calls, so each returned [`GlyphSlot`] is only valid until
/// the next call.
pub struct FontRasterizer {
    font: Font<'static>,
    scale: Scale,
    buffer: Vec<u8>,
}

impl FontRasterizer {
    /// Loads a font file and fixes the pixel size for all subsequent
    /// rasterization.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse as a font.
    pub fn from_file(path: &Path, pixel_size: u32) -> Result<Self, RasterError> {
        let font_data = std::fs::read(path)?;
        let font =
            Font::try_from_vec(font_data).ok_or_else(|| RasterError::FontLoad(path.into()))?;

        Ok(FontRasterizer {
            font,
            scale: Scale::uniform(pixel_size as f32),
            buffer: Vec::new(),
        })
    }
}

impl Rasterizer for FontRasterizer {
    fn rasterize(&mut self, ch: char) -> Result<GlyphSlot<'_>, RasterError> {
        let glyph = self.font.glyph(ch);
        if glyph.id().0 == 0 {
            // The font maps the character to its .notdef slot.
            return Err(RasterError::MissingGlyph(ch));
        }

        let glyph = glyph
            .scaled(self.scale)
            .positioned(rusttype::Point::default());

        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            if !ch.is_whitespace() {
                log::warn!(
                    "no bounding box for non-whitespace glyph {:x}",
                    ch as u32
                );
            }

            self.buffer.clear();
            return Ok(GlyphSlot {
                buffer: &self.buffer,
                pitch: 0,
                rows: 0,
                width: 0,
                top: 0,
            });
        };

        let width = bounding_box.width() as usize;
        let rows = bounding_box.height() as usize;
        let pitch = width.div_ceil(8);

        self.buffer.clear();
        self.buffer.resize(pitch * rows, 0);

        let buffer = &mut self.buffer;
        glyph.draw(|x, y, coverage| {
            if coverage > 0.5 {
                buffer[y as usize * pitch + x as usize / 8] |= 0x80u8 >> (x % 8);
            }
        });

        Ok(GlyphSlot {
            buffer: &self.buffer,
            pitch,
            rows,
            width,
            // `min.y` is negative for glyphs extending above the baseline.
            top: -bounding_box.min.y,
        })
    }
}
