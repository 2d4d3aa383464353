//! `.sub` format converter.
//!
//! # Format Overview
//!
//! Blocks are separated by a blank line. Each block is a timing line and a
//! text line:
//!
//! ```text
//! 00:02:17.440,00:02:20.375
//! Senator, we're making[br]our final approach into Coruscant.
//!
//! 00:02:20.476,00:02:22.501
//! Very good, Lieutenant.
//! ```
//!
//! The timing line holds start and end separated by a comma (this format
//! does not use the `-->` arrow), times as `H:MM:SS.fff`. Multi-line
//! captions live on one physical line joined by the literal `[br]` token.
//! Output uses CRLF line endings and is trimmed as a whole.

use crate::error::{ParseError, TimeError};
use crate::formats::{split_blocks, FormatConverter};
use crate::timecode::TimeCodec;
use crate::types::Block;

/// Timestamp grammar: `H:MM:SS.fff`, three fractional digits.
const SUB_TIME: TimeCodec = TimeCodec::new('.', 3);

/// Token joining caption lines on one physical line.
const LINE_JOINER: &str = "[br]";

/// The `.sub` converter variant.
pub struct SubFormat;

impl FormatConverter for SubFormat {
    fn extension(&self) -> &'static str {
        "sub"
    }

    fn parse(&self, content: &str) -> Result<Vec<Block>, ParseError> {
        parse_sub(content)
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, TimeError> {
        write_sub(blocks)
    }
}

/// Parse `.sub` content into blocks.
pub fn parse_sub(content: &str) -> Result<Vec<Block>, ParseError> {
    let mut blocks = Vec::new();

    for (index, chunk) in split_blocks(content).into_iter().enumerate() {
        let lines: Vec<&str> = chunk.lines().collect();
        if lines.len() < 2 {
            return Err(ParseError::malformed_block(
                index,
                "expected a timing line followed by a text line",
            ));
        }

        let times: Vec<&str> = lines[0].split(',').collect();
        if times.len() != 2 {
            return Err(ParseError::malformed_block(
                index,
                format!("expected two comma-separated times, got '{}'", lines[0]),
            ));
        }

        let start = SUB_TIME.decode(times[0].trim())?;
        let end = SUB_TIME.decode(times[1].trim())?;

        let text: Vec<String> = lines[1..]
            .iter()
            .flat_map(|line| line.split(LINE_JOINER))
            .map(str::to_string)
            .collect();

        blocks.push(Block::new(start, end, text));
    }

    Ok(blocks)
}

/// Write blocks as `.sub` content.
pub fn write_sub(blocks: &[Block]) -> Result<String, TimeError> {
    let mut output = String::new();

    for block in blocks {
        let start = SUB_TIME.encode(block.start)?;
        let end = SUB_TIME.encode(block.end)?;

        output.push_str(&start);
        output.push(',');
        output.push_str(&end);
        output.push_str("\r\n");
        output.push_str(&block.lines.join(LINE_JOINER));
        output.push_str("\r\n\r\n");
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "00:02:17.440,00:02:20.375\r\n\
        Senator, we're making[br]our final approach into Coruscant.\r\n\
        \r\n\
        00:02:20.476,00:02:22.501\r\n\
        Very good, Lieutenant.";

    #[test]
    fn parse_basic() {
        let content = CANONICAL.replace("\r\n", "\n");
        let blocks = parse_sub(&content).unwrap();

        assert_eq!(blocks.len(), 2);
        assert!((blocks[0].start - 137.44).abs() < 0.001);
        assert!((blocks[0].end - 140.375).abs() < 0.001);
        assert_eq!(
            blocks[0].lines,
            vec![
                "Senator, we're making".to_string(),
                "our final approach into Coruscant.".to_string()
            ]
        );
        assert_eq!(blocks[1].lines, vec!["Very good, Lieutenant.".to_string()]);
    }

    #[test]
    fn round_trip_is_byte_identical_for_canonical_input() {
        let content = CANONICAL.replace("\r\n", "\n");
        let blocks = parse_sub(&content).unwrap();
        assert_eq!(write_sub(&blocks).unwrap(), CANONICAL);
    }

    #[test]
    fn serialize_uses_crlf_and_trims() {
        let blocks = vec![Block::single_line(0.0, 1.0, "Hi")];
        let output = write_sub(&blocks).unwrap();
        assert_eq!(output, "00:00:00.000,00:00:01.000\r\nHi");
    }

    #[test]
    fn serialize_joins_lines_with_br_token() {
        let blocks = vec![Block::new(
            0.0,
            1.0,
            vec!["One".to_string(), "Two".to_string()],
        )];
        let output = write_sub(&blocks).unwrap();
        assert!(output.contains("One[br]Two"));
        assert!(!output.contains("One\nTwo"));
    }

    #[test]
    fn parse_tolerates_blank_line_runs_between_blocks() {
        let content =
            "00:00:01.000,00:00:02.000\nFirst\n\n\n00:00:03.000,00:00:04.000\nSecond";
        let blocks = parse_sub(content).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines, vec!["Second".to_string()]);
    }

    #[test]
    fn single_line_chunk_is_malformed() {
        let err = parse_sub("just one line").unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { index: 0, .. }));
    }

    #[test]
    fn timing_line_needs_exactly_two_times() {
        let err = parse_sub("00:00:01.000\nText").unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { .. }));

        let err = parse_sub("00:00:01.000,00:00:02.000,00:00:03.000\nText").unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { index: 0, .. }));
    }

    #[test]
    fn bad_timestamp_surfaces_offending_text() {
        let err = parse_sub("not-a-time,00:00:02.000\nText").unwrap_err();
        assert!(matches!(err, ParseError::Time(_)));
        assert!(err.to_string().contains("not-a-time"));
    }

    #[test]
    fn malformed_block_reports_chunk_index() {
        let content = "00:00:01.000,00:00:02.000\nFine\n\norphan";
        let err = parse_sub(content).unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { index: 1, .. }));
    }

    #[test]
    fn negative_time_is_a_contract_violation() {
        let blocks = vec![Block::single_line(-1.0, 2.0, "Bad")];
        assert!(matches!(
            write_sub(&blocks),
            Err(TimeError::InvalidTime(_))
        ));
    }
}
