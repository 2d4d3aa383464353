//! Format converters and the extension registry.
//!
//! Each on-disk format is one converter variant behind the [`FormatConverter`]
//! trait: a pure `parse`/`serialize` pair over the format's own delimiters
//! and timestamp grammar. Variants share the block-splitting helper and the
//! [`TimeCodec`](crate::timecode::TimeCodec); adding a format means adding a
//! new variant and registering it, never modifying an existing one.

mod srt;
mod sub;

pub use srt::SrtFormat;
pub use sub::SubFormat;

use std::collections::HashMap;

use crate::error::{ParseError, SubtitleError, TimeError};
use crate::types::Block;

/// Converter between one format's file text and the internal block sequence.
///
/// Converters hold no state; each call is independent and may run
/// concurrently on different inputs.
pub trait FormatConverter: Send + Sync {
    /// Typical file extension for this format.
    fn extension(&self) -> &'static str;

    /// Parse normalized file text into the internal format.
    ///
    /// Input is assumed BOM-free with LF line endings (see
    /// [`normalize`](crate::normalize)).
    fn parse(&self, content: &str) -> Result<Vec<Block>, ParseError>;

    /// Serialize the internal format to file text.
    ///
    /// Total for well-formed blocks; the only failure path is a negative or
    /// non-finite block time, rejected by the timestamp encoder.
    fn serialize(&self, blocks: &[Block]) -> Result<String, TimeError>;
}

/// Factory producing a boxed converter.
pub type ConverterFactory = fn() -> Box<dyn FormatConverter>;

/// Maps file extensions to format converter factories.
///
/// Lookup is case-insensitive. There is no fallback format: an extension
/// without a registration is an error.
pub struct Registry {
    factories: HashMap<String, ConverterFactory>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in formats registered.
    pub fn with_builtin_formats() -> Self {
        let mut registry = Self::new();
        registry.register("sub", || Box::new(SubFormat));
        registry.register("srt", || Box::new(SrtFormat));
        registry
    }

    /// Register a converter factory for an extension.
    pub fn register(&mut self, extension: &str, factory: ConverterFactory) {
        self.factories.insert(extension.to_lowercase(), factory);
    }

    /// Obtain a converter for an extension.
    ///
    /// # Returns
    /// * `Err(SubtitleError::UnknownFormat)` - If no converter is registered
    ///   for the extension.
    pub fn converter_for(&self, extension: &str) -> Result<Box<dyn FormatConverter>, SubtitleError> {
        self.factories
            .get(&extension.to_lowercase())
            .map(|factory| factory())
            .ok_or_else(|| SubtitleError::UnknownFormat(extension.to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtin_formats()
    }
}

/// Split normalized file text into per-block chunks on blank lines.
///
/// Runs of blank lines between blocks are tolerated; a chunk that is pure
/// whitespace is not a block.
pub(crate) fn split_blocks(content: &str) -> Vec<&str> {
    content
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
