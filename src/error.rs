//! Error types for subtitle parsing, conversion, and shifting.

use std::path::PathBuf;

/// Top-level error for subtitle operations.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// Failed to read subtitle file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write subtitle file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Extension has no registered converter.
    #[error("Unknown subtitle format: '{0}'")]
    UnknownFormat(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    /// Timecode error.
    #[error("Timecode error: {0}")]
    TimeError(#[from] TimeError),

    /// Shift error.
    #[error("Shift error: {0}")]
    ShiftError(#[from] ShiftError),
}

/// Errors that can occur while decoding or encoding timestamps.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// Timestamp text does not match the format's clock-and-fraction grammar.
    #[error("Malformed timestamp: '{0}'")]
    MalformedTimestamp(String),

    /// Negative or non-finite time handed to the encoder.
    #[error("Invalid time value: {0}")]
    InvalidTime(f64),
}

/// Errors that can occur during subtitle parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Block chunk is missing its timing line or text line.
    #[error("Malformed block at index {index}: {message}")]
    MalformedBlock { index: usize, message: String },

    /// Timestamp inside a block could not be decoded.
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Errors that can occur during time-shift operations.
#[derive(Debug, thiserror::Error)]
pub enum ShiftError {
    /// Degenerate or inverted shift window.
    #[error("Invalid shift window: from {from} till {till}")]
    InvalidWindow { from: f64, till: f64 },
}

impl SubtitleError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ParseError {
    /// Create a malformed-block error at the given chunk index.
    pub fn malformed_block(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedBlock {
            index,
            message: message.into(),
        }
    }
}
