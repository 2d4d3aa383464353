//! Time-shift engine.
//!
//! Shifts block times by a constant offset, tapered across a window so that
//! blocks near the window start move less than blocks near the window end.
//! This approximates linear drift correction: given window `[from, till]`,
//! each eligible endpoint `t` moves by `offset * (t - from) / (till - from)`.
//!
//! The per-block transform is pure and independent of every other block, so
//! callers may apply it across a sequence in any order (or in parallel) and
//! collect results back into position.

use serde::{Deserialize, Serialize};

use crate::error::ShiftError;
use crate::types::Block;

/// Validated `[from, till]` shift window.
///
/// Construction rejects degenerate windows up front so the blend fraction
/// below can never divide by zero or produce NaN. Deserialization goes
/// through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    from: f64,
    till: f64,
}

/// Unvalidated wire form of [`TimeWindow`].
#[derive(Deserialize)]
struct RawTimeWindow {
    from: f64,
    till: f64,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = ShiftError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.till)
    }
}

impl TimeWindow {
    /// Create a window over `[from, till]`.
    ///
    /// # Returns
    /// * `Err(ShiftError::InvalidWindow)` - If either bound is non-finite,
    ///   `from > till`, or `from == till`.
    pub fn new(from: f64, till: f64) -> Result<Self, ShiftError> {
        if !from.is_finite() || !till.is_finite() || from >= till {
            return Err(ShiftError::InvalidWindow { from, till });
        }
        Ok(Self { from, till })
    }

    /// Window start in seconds.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Window end in seconds.
    pub fn till(&self) -> f64 {
        self.till
    }

    /// Whether both block endpoints lie within the window (inclusive).
    ///
    /// This is an all-or-nothing gate: a block with either endpoint outside
    /// the window is not eligible for shifting at all.
    pub fn contains_block(&self, block: &Block) -> bool {
        self.from <= block.start
            && block.start <= self.till
            && self.from <= block.end
            && block.end <= self.till
    }

    /// Proportional position of `t` within the window (0 at `from`, 1 at
    /// `till`).
    fn blend_fraction(&self, t: f64) -> f64 {
        (t - self.from) / (self.till - self.from)
    }
}

/// Shift one block's times, tapered by its position in the window.
///
/// Blocks with either endpoint outside the window are left untouched.
/// Returns whether the block was shifted.
pub fn shift_block(block: &mut Block, offset_seconds: f64, window: &TimeWindow) -> bool {
    if !window.contains_block(block) {
        return false;
    }

    block.start += offset_seconds * window.blend_fraction(block.start);
    block.end += offset_seconds * window.blend_fraction(block.end);
    true
}

/// Shift every eligible block in a sequence.
///
/// Returns the number of blocks shifted.
pub fn shift_blocks(blocks: &mut [Block], offset_seconds: f64, window: &TimeWindow) -> usize {
    let shifted = blocks
        .iter_mut()
        .map(|block| shift_block(block, offset_seconds, window))
        .filter(|&shifted| shifted)
        .count();

    tracing::debug!(
        "Shifted {} of {} blocks by {:+.3}s over [{:.3}, {:.3}]",
        shifted,
        blocks.len(),
        offset_seconds,
        window.from(),
        window.till()
    );

    shifted
}
