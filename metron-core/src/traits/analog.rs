//! Analog input source trait

use crate::config::ChannelId;
use crate::sampler::Sample;

/// Errors that can occur when reading an analog channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// Channel identifier has no backing hardware input
    ///
    /// A configuration-time defect: the channel list names an input
    /// the board never wired up.
    UnknownChannel,
    /// ADC conversion failed
    ReadFailed,
}

/// Trait for analog input sources
///
/// Implementations read the instantaneous value of one hardware
/// channel. Consecutive reads are not atomic as a set; a snapshot's
/// coherence is bounded by the caller's total capture time.
pub trait AnalogSource {
    /// Read the current value of `channel`
    ///
    /// Takes `&mut self` because ADC reads typically require mutable
    /// access.
    fn read(&mut self, channel: ChannelId) -> Result<Sample, SourceError>;
}
