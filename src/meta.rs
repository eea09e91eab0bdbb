//! The serializable char-data record format.

use crate::glyph::Glyph;

/// One character's entry in the emitted char data.
///
/// This is the sole persisted artifact of the tool: the `font2json` binary
/// writes a JSON array of these records, one per requested character, in
/// request order. Downstream toolchains deserialize them with the
/// `serde-deserialize` Cargo feature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
pub struct GlyphRecord {
    /// The character, serialized as a one-character string.
    #[cfg_attr(
        any(feature = "serde-serialize", feature = "serde-deserialize"),
        serde(rename = "char")
    )]
    pub ch: char,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Top-side bearing in pixels; may be negative.
    pub top: i32,
    /// The bitmap as `height` strings of `width` characters each, row-major,
    /// `.` for off pixels and `*` for on pixels.
    pub data: Vec<String>,
}

impl GlyphRecord {
    /// Encodes a glyph's flat pixel buffer into the row-string record form.
    #[must_use]
    pub fn from_glyph(glyph: &Glyph) -> Self {
        let bitmap = &glyph.bitmap;
        let mut data = Vec::with_capacity(bitmap.height);
        if bitmap.width > 0 {
            for row in bitmap.pixels.chunks_exact(bitmap.width) {
                data.push(
                    row.iter()
                        .map(|&px| if px == 0 { '.' } else { '*' })
                        .collect(),
                );
            }
        }

        GlyphRecord {
            ch: glyph.ch,
            width: bitmap.width as u32,
            height: bitmap.height as u32,
            top: glyph.top,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;

    fn sample_glyph() -> Glyph {
        Glyph {
            bitmap: Bitmap::new(3, 2, vec![0, 1, 0, 1, 0, 1]),
            ch: 'A',
            top: 7,
        }
    }

    #[test]
    fn record_rows_match_bitmap() {
        let record = GlyphRecord::from_glyph(&sample_glyph());
        assert_eq!(record.ch, 'A');
        assert_eq!(record.width, 3);
        assert_eq!(record.height, 2);
        assert_eq!(record.top, 7);
        assert_eq!(record.data, [".*.", "*.*"]);
        assert!(record.data.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn empty_glyph_yields_empty_data() {
        let glyph = Glyph {
            bitmap: Bitmap::new(0, 0, Vec::new()),
            ch: ' ',
            top: 0,
        };
        let record = GlyphRecord::from_glyph(&glyph);
        assert_eq!(record.width, 0);
        assert_eq!(record.height, 0);
        assert!(record.data.is_empty());
    }

    #[cfg(all(feature = "serde-serialize", feature = "serde_json"))]
    #[test]
    fn record_serializes_with_stable_field_names() {
        let json = serde_json::to_value(GlyphRecord::from_glyph(&sample_glyph())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "char": "A",
                "width": 3,
                "height": 2,
                "top": 7,
                "data": [".*.", "*.*"],
            })
        );
    }
}
