//! Channel and stream configuration
//!
//! Configuration is fixed at build time and validated once at startup.
//! Validation failures are fatal: the firmware refuses to start rather
//! than stream with a broken configuration.

use heapless::Vec;

use crate::encode::MAX_BYTES_PER_VALUE;

/// Maximum number of configured channels
pub const MAX_CHANNELS: usize = 8;

/// Identifier of one analog input channel
///
/// The value is the hardware ADC input index, not a position in the
/// channel list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

/// Configuration defects rejected at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Channel list is empty
    NoChannels,
    /// Channel list exceeds [`MAX_CHANNELS`]
    TooManyChannels,
    /// Sampling interval is zero
    ZeroInterval,
    /// Baud rate is zero
    ZeroBaud,
    /// Baud rate cannot carry one worst-case encoded line per
    /// sampling interval
    BaudTooLow {
        /// Minimum baud rate for the configured interval and channel count
        required_baud: u32,
    },
}

/// Ordered, immutable list of analog input channels
///
/// A reading's identity is its position in this list; position 0 is the
/// first field of every emitted line. The list is never mutated after
/// construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelList {
    ids: Vec<ChannelId, MAX_CHANNELS>,
}

impl ChannelList {
    /// Build a channel list, rejecting empty and oversized inputs
    pub fn new(ids: &[ChannelId]) -> Result<Self, ConfigError> {
        if ids.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        let ids = Vec::from_slice(ids).map_err(|_| ConfigError::TooManyChannels)?;
        Ok(Self { ids })
    }

    /// Number of configured channels (always >= 1)
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for slice-like ergonomics
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the channels in sampling order
    pub fn iter(&self) -> core::slice::Iter<'_, ChannelId> {
        self.ids.iter()
    }

    /// Channels in sampling order
    pub fn as_slice(&self) -> &[ChannelId] {
        &self.ids
    }
}

/// Stream timing and transport configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamConfig {
    /// Sampling interval in microseconds
    pub interval_us: u32,
    /// Serial transmission rate in bits per second
    pub baud: u32,
}

impl StreamConfig {
    /// Minimum baud rate that carries one worst-case encoded line
    /// within one sampling interval
    pub fn required_baud(&self, channel_count: usize) -> u32 {
        let line_bits = channel_count as u64 * MAX_BYTES_PER_VALUE as u64 * 8;
        let required = (line_bits * 1_000_000).div_ceil(u64::from(self.interval_us.max(1)));
        required.min(u64::from(u32::MAX)) as u32
    }

    /// Validate the configuration against a channel count
    ///
    /// The throughput check assumes every value takes its worst-case
    /// encoded width ([`MAX_BYTES_PER_VALUE`] bytes including the
    /// separator).
    pub fn validate(&self, channel_count: usize) -> Result<(), ConfigError> {
        if self.interval_us == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.baud == 0 {
            return Err(ConfigError::ZeroBaud);
        }
        let required_baud = self.required_baud(channel_count);
        if self.baud < required_baud {
            return Err(ConfigError::BaudTooLow { required_baud });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> std::vec::Vec<ChannelId> {
        raw.iter().copied().map(ChannelId).collect()
    }

    #[test]
    fn test_empty_channel_list_rejected() {
        let result = ChannelList::new(&[]);
        assert!(matches!(result, Err(ConfigError::NoChannels)));
    }

    #[test]
    fn test_oversized_channel_list_rejected() {
        let too_many = ids(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let result = ChannelList::new(&too_many);
        assert!(matches!(result, Err(ConfigError::TooManyChannels)));
    }

    #[test]
    fn test_channel_order_preserved() {
        let list = ChannelList::new(&ids(&[2, 0, 1])).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice(), &[ChannelId(2), ChannelId(0), ChannelId(1)]);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = StreamConfig { interval_us: 0, baud: 921_600 };
        assert_eq!(config.validate(3), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_zero_baud_rejected() {
        let config = StreamConfig { interval_us: 1_000, baud: 0 };
        assert_eq!(config.validate(3), Err(ConfigError::ZeroBaud));
    }

    #[test]
    fn test_required_baud_three_channels_at_1khz() {
        let config = StreamConfig { interval_us: 1_000, baud: 921_600 };
        // 3 channels * 7 bytes * 8 bits per 1ms interval
        assert_eq!(config.required_baud(3), 168_000);
    }

    #[test]
    fn test_undersized_baud_rejected() {
        let config = StreamConfig { interval_us: 1_000, baud: 9_600 };
        assert_eq!(
            config.validate(3),
            Err(ConfigError::BaudTooLow { required_baud: 168_000 })
        );
    }

    #[test]
    fn test_default_deployment_validates() {
        let config = StreamConfig { interval_us: 1_000, baud: 921_600 };
        assert_eq!(config.validate(3), Ok(()));
    }
}
