//! Command-line surface of the `font2json` binary.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use crate::export::export_glyphs;
use crate::font::FontRasterizer;

/// Reads a font, outputs char data in JSON format.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group = clap::ArgGroup::new("selection").required(true).multiple(false))]
pub struct Args {
    /// Font file
    #[arg(short, long)]
    font: PathBuf,
    /// Font size in pixels
    #[arg(short, long)]
    size: u32,
    /// Output JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Range of chars to decode, written as 'low,high' (both 0-255 inclusive)
    #[arg(short, long, group = "selection")]
    range: Option<String>,
    /// Chars to decode as a string; may be given multiple times
    #[arg(short, long, group = "selection")]
    chars: Vec<String>,
    /// Print metrics for every decoded char plus summary statistics
    #[arg(short, long)]
    verbose: bool,
    /// Render every char to the console (implies --verbose)
    #[arg(long)]
    display_chars: bool,
}

/// Default font directories, resolved once at startup.
///
/// Used to retry a font path that does not resolve relative to the current
/// directory: the platform user font directory and, on Windows, the system
/// font directory under `%SystemRoot%`.
pub struct FontDirs {
    search_dirs: Vec<PathBuf>,
}

impl FontDirs {
    /// Discovers the default font directories of the current platform.
    #[must_use]
    pub fn resolve() -> Self {
        let mut search_dirs = Vec::new();

        if let Some(user_dirs) = directories::UserDirs::new() {
            if let Some(dir) = user_dirs.font_dir() {
                search_dirs.push(dir.to_path_buf());
            }
        }

        if cfg!(windows) {
            if let Some(windir) =
                std::env::var_os("SystemRoot").or_else(|| std::env::var_os("windir"))
            {
                let dir = PathBuf::from(windir).join("fonts");
                if dir.is_dir() {
                    search_dirs.push(dir);
                }
            }
        }

        FontDirs { search_dirs }
    }

    /// Resolves a font path, falling back to the default directories when
    /// the path itself names no file.
    #[must_use]
    pub fn locate(&self, font: &Path) -> Option<PathBuf> {
        if font.is_file() {
            return Some(font.to_path_buf());
        }

        self.search_dirs
            .iter()
            .map(|dir| dir.join(font))
            .find(|candidate| candidate.is_file())
    }
}

/// Parses a 'low,high' range spec into normalized inclusive bounds.
///
/// Reversed bounds are swapped rather than rejected; bounds outside 0-255
/// are an error.
fn parse_range(spec: &str) -> anyhow::Result<(u8, u8)> {
    let invalid = || format!("Invalid range '{spec}', must be 'low,high'");

    let (low, high) = spec.split_once(',').with_context(invalid)?;
    let mut low: i64 = low.trim().parse().ok().with_context(invalid)?;
    let mut high: i64 = high.trim().parse().ok().with_context(invalid)?;

    if low > high {
        std::mem::swap(&mut low, &mut high);
    }
    if low < 0 || high > 255 {
        bail!("Invalid range '{spec}', must be between 0 and 255");
    }

    Ok((low as u8, high as u8))
}

/// Builds the ordered character list from the selection flags: either the
/// ascending numeric range, or the deduplicated, ascending-sorted set of
/// characters from the given strings.
fn selected_chars(args: &Args) -> anyhow::Result<Vec<char>> {
    if let Some(spec) = &args.range {
        let (low, high) = parse_range(spec)?;
        return Ok((low..=high).map(char::from).collect());
    }

    let mut charset = BTreeSet::new();
    for chars in &args.chars {
        charset.extend(chars.chars());
    }
    Ok(charset.into_iter().collect())
}

/// Runs the whole export: select characters, rasterize, display, write.
///
/// # Errors
///
/// Fails on an invalid selection, an unresolvable or unparsable font, any
/// per-character rasterization failure (which aborts the whole batch), or a
/// failed output write.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let chars = selected_chars(args)?;

    let font_dirs = FontDirs::resolve();
    let font_path = font_dirs
        .locate(&args.font)
        .with_context(|| format!("Unable to find '{}'", args.font.display()))?;
    if font_path != args.font {
        println!("Using font '{}'", font_path.display());
    }

    let mut rasterizer = FontRasterizer::from_file(&font_path, args.size)
        .with_context(|| format!("Unable to load '{}'", font_path.display()))?;

    log::info!(
        "decoding {} chars from '{}' at {}px",
        chars.len(),
        font_path.display(),
        args.size
    );
    let batch = export_glyphs(chars, &mut rasterizer)?;

    let verbose = args.verbose || args.display_chars;
    for glyph in &batch.glyphs {
        if verbose {
            println!(
                "Char: '{}' Code: {} Width: {} Height: {} Top: {}",
                glyph.ch,
                glyph.ch as u32,
                glyph.width(),
                glyph.height(),
                glyph.top
            );
        }
        if args.display_chars {
            println!("{}", glyph.bitmap);
        }
    }

    if verbose {
        if let Some(stats) = batch.stats() {
            println!(
                "Min height:{:<3} Max height: {:<3}",
                stats.min_height, stats.max_height
            );
            println!(
                "Min width: {:<3} Max width:  {:<3}",
                stats.min_width, stats.max_width
            );
        }
    }

    if let Some(output) = &args.output {
        let serialized =
            serde_json::to_string_pretty(&batch.records).context("Unable to serialize char data")?;
        std::fs::write(output, serialized)
            .with_context(|| format!("Unable to write '{}'", output.display()))?;
        println!("Wrote char data to '{}'", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_chars(chars: &[&str]) -> Args {
        Args {
            font: PathBuf::new(),
            size: 16,
            output: None,
            range: None,
            chars: chars.iter().map(ToString::to_string).collect(),
            verbose: false,
            display_chars: false,
        }
    }

    #[test]
    fn range_parses_and_swaps() {
        assert_eq!(parse_range("65,67").unwrap(), (65, 67));
        assert_eq!(parse_range("67,65").unwrap(), (65, 67));
        assert_eq!(parse_range(" 0 , 255 ").unwrap(), (0, 255));
    }

    #[test]
    fn range_rejects_malformed_specs() {
        for spec in ["65", "65;67", "a,b", "6 5,67", ""] {
            let err = parse_range(spec).unwrap_err();
            assert!(err.to_string().contains("must be 'low,high'"), "{spec}");
        }
    }

    #[test]
    fn range_rejects_out_of_bounds_specs() {
        for spec in ["-1,5", "0,256", "300,400"] {
            let err = parse_range(spec).unwrap_err();
            assert!(err.to_string().contains("between 0 and 255"), "{spec}");
        }
    }

    #[test]
    fn range_selection_is_ascending() {
        let mut args = args_with_chars(&[]);
        args.range = Some("67,65".to_string());
        assert_eq!(selected_chars(&args).unwrap(), ['A', 'B', 'C']);
    }

    #[test]
    fn char_selection_dedups_and_sorts() {
        let args = args_with_chars(&["banana", "cab"]);
        assert_eq!(selected_chars(&args).unwrap(), ['a', 'b', 'c', 'n']);
    }

    #[test]
    fn empty_char_strings_select_nothing() {
        let args = args_with_chars(&["", ""]);
        assert!(selected_chars(&args).unwrap().is_empty());
    }
}
