//! SubRip (`.srt`) format converter.
//!
//! # Format Overview
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello, world!
//!
//! 2
//! 00:00:05,000 --> 00:00:08,000
//! This is a test.
//! ```
//!
//! Each block has an index line (ignored on parse, regenerated 1-based on
//! serialize), a timing line `HH:MM:SS,mmm --> HH:MM:SS,mmm`, and one or
//! more text lines. Multi-line captions are physical lines, one `Block`
//! line per physical line.

use crate::error::{ParseError, TimeError};
use crate::formats::{split_blocks, FormatConverter};
use crate::timecode::TimeCodec;
use crate::types::Block;

/// Timestamp grammar: `HH:MM:SS,mmm`, comma fraction separator.
const SRT_TIME: TimeCodec = TimeCodec::new(',', 3);

/// Separator between start and end on the timing line.
const TIME_SEPARATOR: &str = " --> ";

/// The SubRip converter variant.
pub struct SrtFormat;

impl FormatConverter for SrtFormat {
    fn extension(&self) -> &'static str {
        "srt"
    }

    fn parse(&self, content: &str) -> Result<Vec<Block>, ParseError> {
        parse_srt(content)
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, TimeError> {
        write_srt(blocks)
    }
}

/// Parse `.srt` content into blocks.
pub fn parse_srt(content: &str) -> Result<Vec<Block>, ParseError> {
    let mut blocks = Vec::new();

    for (index, chunk) in split_blocks(content).into_iter().enumerate() {
        let lines: Vec<&str> = chunk.lines().collect();

        // The index line before the timing line is optional in the wild.
        let timing_idx = lines
            .iter()
            .position(|line| line.contains(TIME_SEPARATOR))
            .ok_or_else(|| ParseError::malformed_block(index, "missing timing line"))?;

        let times: Vec<&str> = lines[timing_idx].split(TIME_SEPARATOR).collect();
        if times.len() != 2 {
            return Err(ParseError::malformed_block(
                index,
                format!("expected two times, got '{}'", lines[timing_idx]),
            ));
        }

        let start = SRT_TIME.decode(times[0].trim())?;
        let end = SRT_TIME.decode(times[1].trim())?;

        let text: Vec<String> = lines[timing_idx + 1..]
            .iter()
            .map(|line| line.to_string())
            .collect();
        if text.is_empty() {
            return Err(ParseError::malformed_block(index, "missing text line"));
        }

        blocks.push(Block::new(start, end, text));
    }

    Ok(blocks)
}

/// Write blocks as `.srt` content.
pub fn write_srt(blocks: &[Block]) -> Result<String, TimeError> {
    let mut output = String::new();

    for (i, block) in blocks.iter().enumerate() {
        let start = SRT_TIME.encode(block.start)?;
        let end = SRT_TIME.encode(block.end)?;

        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!("{}{}{}\n", start, TIME_SEPARATOR, end));
        output.push_str(&block.lines.join("\n"));
        output.push_str("\n\n");
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let content = "1\n\
            00:00:01,000 --> 00:00:04,000\n\
            Hello, world!\n\
            \n\
            2\n\
            00:00:05,000 --> 00:00:08,000\n\
            This is a test.\n\
            With multiple lines.\n";

        let blocks = parse_srt(content).unwrap();

        assert_eq!(blocks.len(), 2);
        assert!((blocks[0].start - 1.0).abs() < 0.001);
        assert!((blocks[0].end - 4.0).abs() < 0.001);
        assert_eq!(blocks[0].lines, vec!["Hello, world!".to_string()]);
        assert_eq!(
            blocks[1].lines,
            vec![
                "This is a test.".to_string(),
                "With multiple lines.".to_string()
            ]
        );
    }

    #[test]
    fn parse_without_index_lines() {
        let content = "00:00:01,000 --> 00:00:04,000\n\
            Hello!\n\
            \n\
            00:00:05,000 --> 00:00:08,000\n\
            Again.\n";

        let blocks = parse_srt(content).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn missing_timing_line_is_malformed() {
        let err = parse_srt("1\nno timestamps here").unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { index: 0, .. }));
    }

    #[test]
    fn missing_text_line_is_malformed() {
        let err = parse_srt("1\n00:00:01,000 --> 00:00:04,000").unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { index: 0, .. }));
    }

    #[test]
    fn serialize_regenerates_indices() {
        let blocks = vec![
            Block::single_line(1.0, 4.0, "First"),
            Block::single_line(5.0, 8.0, "Second"),
        ];

        let output = write_srt(&blocks).unwrap();
        assert_eq!(
            output,
            "1\n00:00:01,000 --> 00:00:04,000\nFirst\n\n\
             2\n00:00:05,000 --> 00:00:08,000\nSecond"
        );
    }

    #[test]
    fn round_trip_preserves_blocks() {
        let blocks = vec![
            Block::new(1.25, 4.0, vec!["One".to_string(), "Two".to_string()]),
            Block::single_line(5.5, 8.0, "Three"),
        ];

        let output = write_srt(&blocks).unwrap();
        let reparsed = parse_srt(&output).unwrap();
        assert_eq!(reparsed, blocks);
    }
}
