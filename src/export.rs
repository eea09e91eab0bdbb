//! Batch export: character codes in, serializable records and statistics out.

use crate::error::ExportError;
use crate::glyph::Glyph;
use crate::meta::GlyphRecord;
use crate::raster::Rasterizer;

/// Aggregate bitmap dimensions across a non-empty glyph batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphStats {
    /// Smallest bitmap width in the batch.
    pub min_width: u32,
    /// Largest bitmap width in the batch.
    pub max_width: u32,
    /// Smallest bitmap height in the batch.
    pub min_height: u32,
    /// Largest bitmap height in the batch.
    pub max_height: u32,
}

/// The result of exporting a sequence of characters: the built glyphs and
/// their serializable records, both in request order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBatch {
    /// The extracted glyphs, for console display.
    pub glyphs: Vec<Glyph>,
    /// One record per glyph, ready for serialization.
    pub records: Vec<GlyphRecord>,
}

impl GlyphBatch {
    /// Computes min/max width and height across the batch.
    ///
    /// Returns `None` for an empty batch, which has no meaningful statistics.
    #[must_use]
    pub fn stats(&self) -> Option<GlyphStats> {
        let first = self.records.first()?;
        let mut stats = GlyphStats {
            min_width: first.width,
            max_width: first.width,
            min_height: first.height,
            max_height: first.height,
        };
        for record in &self.records[1..] {
            stats.min_width = stats.min_width.min(record.width);
            stats.max_width = stats.max_width.max(record.width);
            stats.min_height = stats.min_height.min(record.height);
            stats.max_height = stats.max_height.max(record.height);
        }
        Some(stats)
    }
}

/// Rasterizes every character of `codes`, in order, into a [`GlyphBatch`].
///
/// Characters are processed strictly sequentially: each glyph's pixel data is
/// copied out of the rasterizer's slot buffer before the next character is
/// requested. No reordering or deduplication happens here; callers that want
/// a sorted, deduplicated set build one before calling.
///
/// # Errors
///
/// The first rasterization failure aborts the whole batch; no records are
/// returned in that case.
pub fn export_glyphs<R, I>(codes: I, rasterizer: &mut R) -> Result<GlyphBatch, ExportError>
where
    R: Rasterizer,
    I: IntoIterator<Item = char>,
{
    let mut glyphs = Vec::new();
    let mut records = Vec::new();

    for ch in codes {
        let slot = rasterizer
            .rasterize(ch)
            .map_err(|source| ExportError::Rasterize { ch, source })?;
        log::trace!("rasterized {:?} as {}x{}", ch, slot.width, slot.rows);
        let glyph = Glyph::from_slot(&slot, ch);
        records.push(GlyphRecord::from_glyph(&glyph));
        glyphs.push(glyph);
    }

    Ok(GlyphBatch { glyphs, records })
}
