//! Serial line encoding
//!
//! One frame becomes one ASCII line: decimal values separated by single
//! spaces, terminated by a line feed. No escaping, no framing, no
//! checksum - a bare decimal value never contains whitespace.

use core::fmt::Write;

use heapless::String;

use crate::config::MAX_CHANNELS;
use crate::sampler::Sample;

/// Worst-case encoded bytes per value: `"-32768"` plus one separator
/// or terminator byte
///
/// Doubles as the per-sample overhead factor of the startup throughput
/// check.
pub const MAX_BYTES_PER_VALUE: usize = 7;

/// Worst-case encoded line length
pub const MAX_LINE_LEN: usize = MAX_CHANNELS * MAX_BYTES_PER_VALUE;

/// One encoded wire line
pub type Line = String<MAX_LINE_LEN>;

/// Line encoding failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Frame holds no values; a blank line is never emitted
    EmptyFrame,
    /// Encoded line exceeds the line capacity
    Overflow,
}

/// Encode one frame of samples as a wire line
///
/// The first value has no leading space; every following value is
/// preceded by exactly one. A single-value frame is the value and the
/// terminator alone.
pub fn encode_line(values: &[Sample]) -> Result<Line, EncodeError> {
    if values.is_empty() {
        return Err(EncodeError::EmptyFrame);
    }

    let mut line = Line::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            line.push(' ').map_err(|_| EncodeError::Overflow)?;
        }
        write!(line, "{}", value).map_err(|_| EncodeError::Overflow)?;
    }
    line.push('\n').map_err(|_| EncodeError::Overflow)?;

    Ok(line)
}
