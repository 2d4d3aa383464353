//! Timestamp codec.
//!
//! Bidirectional mapping between a format's timestamp text and canonical
//! seconds (`f64`). Each format embeds a [`TimeCodec`] describing its
//! fraction separator and fixed fractional width; the clock portion is always
//! `H:MM:SS`.
//!
//! # Timing Precision
//!
//! Decoding scales the fractional portion by its actual digit count, so
//! `17.4`, `17.44`, and `17.440` all decode correctly regardless of the
//! codec's canonical width. Encoding rounds to the canonical width, so
//! `encode(decode(s))` normalizes the fraction rather than preserving the
//! source byte-for-byte.

use crate::error::TimeError;

/// Codec for one format's timestamp grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCodec {
    /// Separator between the clock portion and the fractional digits.
    pub fraction_sep: char,
    /// Fixed fractional width used when encoding.
    pub fraction_digits: u32,
}

impl TimeCodec {
    /// Create a codec with the given fraction separator and width.
    pub const fn new(fraction_sep: char, fraction_digits: u32) -> Self {
        Self {
            fraction_sep,
            fraction_digits,
        }
    }

    /// Decode timestamp text into canonical seconds.
    ///
    /// # Arguments
    /// * `text` - Timestamp in `H:MM:SS<sep><digits>` form.
    ///
    /// # Returns
    /// * `Ok(f64)` - Seconds, whole clock plus fraction.
    /// * `Err(TimeError::MalformedTimestamp)` - If the clock portion is not
    ///   `H:MM:SS` or the fractional portion is non-numeric or the separator
    ///   is missing.
    pub fn decode(&self, text: &str) -> Result<f64, TimeError> {
        let malformed = || TimeError::MalformedTimestamp(text.to_string());

        let (clock, fraction) = text.split_once(self.fraction_sep).ok_or_else(malformed)?;

        let whole = parse_clock(clock).ok_or_else(malformed)?;

        // An empty fractional component decodes as zero.
        let fraction = if fraction.is_empty() {
            0.0
        } else {
            parse_fraction(fraction).ok_or_else(malformed)?
        };

        Ok(whole as f64 + fraction)
    }

    /// Encode canonical seconds as timestamp text.
    ///
    /// Hours are not reduced modulo 24, so durations of a day or more keep
    /// their full hour count.
    ///
    /// # Returns
    /// * `Ok(String)` - Timestamp in the codec's grammar.
    /// * `Err(TimeError::InvalidTime)` - If `seconds` is negative or
    ///   non-finite (caller contract violation).
    pub fn encode(&self, seconds: f64) -> Result<String, TimeError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimeError::InvalidTime(seconds));
        }

        let whole = seconds.floor() as u64;
        let hours = whole / 3600;
        let mins = (whole % 3600) / 60;
        let secs = whole % 60;

        // The fraction is rounded at the canonical width, scaled to an
        // integer string, and right-padded to that width.
        let scale = 10u64.pow(self.fraction_digits);
        let scaled = (seconds.fract() * scale as f64).round() as u64;
        let mut fraction = scaled.to_string();
        while fraction.len() < self.fraction_digits as usize {
            fraction.push('0');
        }

        Ok(format!(
            "{:02}:{:02}:{:02}{}{}",
            hours, mins, secs, self.fraction_sep, fraction
        ))
    }
}

/// Parse the `H:MM:SS` clock portion into whole seconds.
///
/// Minutes and seconds must be below 60; hours are unbounded.
fn parse_clock(clock: &str) -> Option<u64> {
    let mut parts = clock.splitn(4, ':');
    let hours = parse_digits(parts.next()?)?;
    let minutes = parse_digits(parts.next()?)?;
    let seconds = parse_digits(parts.next()?)?;

    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Parse fractional digits as `0.<digits>`, scaled by the actual digit count.
fn parse_fraction(digits: &str) -> Option<f64> {
    let value = parse_digits(digits)? as f64;
    Some(value / 10f64.powi(digits.len() as i32))
}

/// Parse an unsigned decimal field, rejecting signs and whitespace.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
