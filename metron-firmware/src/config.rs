//! Build-time stream configuration
//!
//! Three analog inputs at 1 kHz, streamed at 921600 baud. Edit and
//! rebuild to change; nothing here is runtime-adjustable.

use metron_core::config::{ChannelId, ChannelList, ConfigError, StreamConfig};

/// ADC inputs to stream, in wire order
///
/// Must match the input table wired up in `main`.
pub const CHANNELS: [ChannelId; 3] = [ChannelId(0), ChannelId(1), ChannelId(2)];

/// Sampling interval in microseconds
pub const SAMPLE_INTERVAL_US: u32 = 1_000;

/// UART baud rate for the sample stream
pub const STREAM_BAUD: u32 = 921_600;

/// Stream timing and transport configuration
pub fn stream_config() -> StreamConfig {
    StreamConfig {
        interval_us: SAMPLE_INTERVAL_US,
        baud: STREAM_BAUD,
    }
}

/// Ordered channel list
pub fn channel_list() -> Result<ChannelList, ConfigError> {
    ChannelList::new(&CHANNELS)
}
