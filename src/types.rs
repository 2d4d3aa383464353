//! Core subtitle types.
//!
//! All timing values are canonical seconds stored as `f64` with sub-second
//! precision. Rounding to a format's fractional width happens only at
//! serialize time.

use serde::{Deserialize, Serialize};

/// A single subtitle block: one caption unit.
///
/// Multi-line captions are represented as multiple entries in `lines`, never
/// as one string with embedded newlines. The internal format is an ordered
/// `Vec<Block>` whose order corresponds to presentation order in the source
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds (`end >= start` assumed by consumers, not
    /// enforced by parsing).
    pub end: f64,
    /// Display text lines, at least one, none containing a line terminator.
    pub lines: Vec<String>,
}

impl Block {
    /// Create a new block.
    pub fn new(start: f64, end: f64, lines: Vec<String>) -> Self {
        Self { start, end, lines }
    }

    /// Create a single-line block.
    pub fn single_line(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            lines: vec![text.into()],
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
