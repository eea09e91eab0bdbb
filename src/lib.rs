//! De-/Serializable char-data records for pre-rasterized monochrome glyphs.
//!
//! The accompanying `font2json` binary (Cargo feature `bin`) reads a font
//! file, rasterizes a chosen set of characters at a fixed pixel size, and
//! writes one JSON record per character:
//!
//! ```json
//! [
//!     {
//!         "char": "A",
//!         "width": 7,
//!         "height": 9,
//!         "top": 9,
//!         "data": [
//!             "...*...",
//!             "..*.*..",
//!             "..*.*..",
//!             ".*...*.",
//!             ".*...*.",
//!             ".*****.",
//!             "*.....*",
//!             "*.....*",
//!             "*.....*"
//!         ]
//!     }
//! ]
//! ```
//!
//! Embedded and retro-display toolchains bake these records into firmware or
//! resource files, bypassing any runtime font-rendering dependency.
//!
//! # Usage
//! ## Reading emitted char data
//! ```ignore
//! // Requires Cargo feature `serde-deserialize` and the `serde_json` crate:
//! const CHAR_DATA: &'static str = include_str!("../chars.json");
//! let records: Vec<glyph_dump::GlyphRecord> = serde_json::from_str(CHAR_DATA)?;
//! ```
//!
//! ## Unpacking packed monochrome bitmaps
//! The core bit-level transform is available on its own, for consumers that
//! deal with a rasterizer's packed output directly:
//! ```
//! use glyph_dump::unpack_mono_bitmap;
//!
//! // One 12px-wide row packed MSB-first into 2 bytes; the trailing 4 bits
//! // of the second byte are padding and are discarded.
//! let packed = [0b1111_0000, 0b0000_1111];
//! let pixels = unpack_mono_bitmap(&packed, 2, 1, 12);
//! assert_eq!(pixels, [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
//! ```

#![cfg_attr(docs_rs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod bitmap;
mod error;
mod export;
mod glyph;
mod meta;
mod raster;

pub use bitmap::{unpack_mono_bitmap, Bitmap};
pub use error::{ExportError, RasterError};
pub use export::{export_glyphs, GlyphBatch, GlyphStats};
pub use glyph::Glyph;
pub use meta::GlyphRecord;
pub use raster::{GlyphSlot, Rasterizer};

#[cfg(feature = "bin")]
mod cli;
#[cfg(feature = "bin")]
mod font;

#[cfg(feature = "bin")]
pub use cli::{run, Args, FontDirs};
#[cfg(feature = "bin")]
pub use font::FontRasterizer;
