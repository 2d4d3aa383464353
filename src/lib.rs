//! Subtitle conversion and time-shift library.
//!
//! Converts subtitle files between on-disk textual formats through a
//! format-agnostic internal representation (an ordered sequence of
//! [`Block`]s carrying canonical seconds), and applies windowed proportional
//! time shifts to that representation.
//!
//! # Architecture
//!
//! - **types**: the internal block model
//! - **timecode**: timestamp text <-> canonical seconds
//! - **formats**: per-format converters behind one trait, selected via the
//!   extension [`Registry`]
//! - **shift**: windowed proportional time-shift engine
//! - **normalize**: BOM/line-ending normalization applied before parsing
//!
//! # Usage
//!
//! ```
//! use subconvert::{convert, shift_blocks, parse_text, render_text, Registry, TimeWindow};
//!
//! let registry = Registry::with_builtin_formats();
//! let content = "00:00:01.000,00:00:04.000\nHello[br]there";
//!
//! // Convert between formats.
//! let srt = convert(content, "sub", "srt", &registry).unwrap();
//! assert!(srt.contains("00:00:01,000 --> 00:00:04,000"));
//!
//! // Or parse, re-time, and render.
//! let mut blocks = parse_text(content, "sub", &registry).unwrap();
//! let window = TimeWindow::new(0.0, 10.0).unwrap();
//! shift_blocks(&mut blocks, 2.0, &window);
//! let shifted = render_text(&blocks, "sub", &registry).unwrap();
//! assert!(shifted.starts_with("00:00:01.200,00:00:04.800"));
//! ```

pub mod error;
pub mod formats;
pub mod normalize;
pub mod shift;
pub mod timecode;
pub mod types;

use std::fs;
use std::path::Path;

pub use error::{ParseError, ShiftError, SubtitleError, TimeError};
pub use formats::{ConverterFactory, FormatConverter, Registry, SrtFormat, SubFormat};
pub use shift::{shift_block, shift_blocks, TimeWindow};
pub use timecode::TimeCodec;
pub use types::Block;

/// Parse raw subtitle text in the format registered for `extension`.
///
/// Applies BOM stripping and line-ending normalization before the format
/// parser runs.
pub fn parse_text(
    content: &str,
    extension: &str,
    registry: &Registry,
) -> Result<Vec<Block>, SubtitleError> {
    let converter = registry.converter_for(extension)?;
    let content = normalize::normalize_line_endings(normalize::strip_bom(content));

    tracing::debug!("Parsing {} content ({} bytes)", converter.extension(), content.len());

    Ok(converter.parse(&content)?)
}

/// Render blocks as text in the format registered for `extension`.
pub fn render_text(
    blocks: &[Block],
    extension: &str,
    registry: &Registry,
) -> Result<String, SubtitleError> {
    let converter = registry.converter_for(extension)?;
    Ok(converter.serialize(blocks)?)
}

/// Convert subtitle text from one format to another.
pub fn convert(
    content: &str,
    from_extension: &str,
    to_extension: &str,
    registry: &Registry,
) -> Result<String, SubtitleError> {
    let blocks = parse_text(content, from_extension, registry)?;
    render_text(&blocks, to_extension, registry)
}

/// Parse a subtitle file from disk, dispatching on its extension.
pub fn parse_file(path: impl AsRef<Path>, registry: &Registry) -> Result<Vec<Block>, SubtitleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SubtitleError::read(path, e))?;
    parse_text(&content, &path_extension(path), registry)
}

/// Write blocks to a subtitle file, dispatching on its extension.
pub fn write_file(
    blocks: &[Block],
    path: impl AsRef<Path>,
    registry: &Registry,
) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let content = render_text(blocks, &path_extension(path), registry)?;
    fs::write(path, content).map_err(|e| SubtitleError::write(path, e))
}

fn path_extension(path: &Path) -> String {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    normalize::file_extension(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_sub_to_srt() {
        let registry = Registry::with_builtin_formats();
        let content = "00:02:17.440,00:02:20.375\nSenator, we're making[br]our final approach.";

        let srt = convert(content, "sub", "srt", &registry).unwrap();
        assert_eq!(
            srt,
            "1\n00:02:17,440 --> 00:02:20,375\nSenator, we're making\nour final approach."
        );
    }

    #[test]
    fn convert_srt_to_sub() {
        let registry = Registry::with_builtin_formats();
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello\nthere\n";

        let sub = convert(content, "srt", "sub", &registry).unwrap();
        assert_eq!(sub, "00:00:01.000,00:00:04.000\r\nHello[br]there");
    }

    #[test]
    fn parse_text_normalizes_bom_and_crlf() {
        let registry = Registry::with_builtin_formats();
        let content = "\u{FEFF}00:00:01.000,00:00:04.000\r\nHello";

        let blocks = parse_text(content, "sub", &registry).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["Hello".to_string()]);
    }

    #[test]
    fn unknown_extension_fails() {
        let registry = Registry::with_builtin_formats();
        let err = parse_text("anything", "xyz", &registry).unwrap_err();
        assert!(matches!(err, SubtitleError::UnknownFormat(_)));
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        let registry = Registry::with_builtin_formats();
        let content = "00:00:01.000,00:00:04.000\nHello";
        assert!(parse_text(content, "SUB", &registry).is_ok());
    }
}
