//! Periodic sampler
//!
//! Produces one snapshot of all configured channels per trigger.
//! Readings within a snapshot are strictly ordered by channel list
//! position. The buffer is allocated once at construction and
//! overwritten in place on every capture; nothing allocates on the
//! per-tick path.

use heapless::Vec;

use crate::config::{ChannelList, MAX_CHANNELS};
use crate::traits::{AnalogSource, SourceError};

/// One analog reading
///
/// Signed so offset-corrected or differential sources fit the same
/// wire format; a 12-bit raw conversion uses the low bits only.
pub type Sample = i16;

/// Owned snapshot of one sampling tick
///
/// The unit handed from the capture context to the transmit context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleFrame {
    values: Vec<Sample, MAX_CHANNELS>,
}

impl SampleFrame {
    /// Readings in channel list order
    pub fn values(&self) -> &[Sample] {
        &self.values
    }
}

/// Sampler with a reusable per-tick buffer
///
/// Owns the channel list and the sample buffer; `buffer.len() ==
/// channels.len()` holds from construction until the process ends.
pub struct Sampler {
    channels: ChannelList,
    buffer: Vec<Sample, MAX_CHANNELS>,
}

impl Sampler {
    /// Create a sampler; the buffer size is fixed to the channel count
    pub fn new(channels: ChannelList) -> Self {
        let mut buffer = Vec::new();
        // Cannot fail: ChannelList is capped at MAX_CHANNELS
        let _ = buffer.resize(channels.len(), 0);
        Self { channels, buffer }
    }

    /// Number of configured channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Capture one snapshot, reading every channel in list order
    ///
    /// On a read fault the frame is abandoned: the buffer may hold a
    /// partial snapshot and must not be emitted until the next
    /// successful capture.
    pub fn capture<S: AnalogSource>(&mut self, source: &mut S) -> Result<(), SourceError> {
        debug_assert_eq!(self.buffer.len(), self.channels.len());
        for (slot, id) in self.buffer.iter_mut().zip(self.channels.iter()) {
            *slot = source.read(*id)?;
        }
        Ok(())
    }

    /// Clone the current snapshot into an owned frame
    pub fn frame(&self) -> SampleFrame {
        SampleFrame {
            values: self.buffer.clone(),
        }
    }

    /// Current snapshot contents
    pub fn samples(&self) -> &[Sample] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::ChannelId;
    use crate::encode::encode_line;

    /// Source returning `2 * id + offset`, optionally failing one channel
    struct TestSource {
        offset: Sample,
        fail_on: Option<ChannelId>,
    }

    impl TestSource {
        fn new(offset: Sample) -> Self {
            Self { offset, fail_on: None }
        }
    }

    impl AnalogSource for TestSource {
        fn read(&mut self, channel: ChannelId) -> Result<Sample, SourceError> {
            if self.fail_on == Some(channel) {
                return Err(SourceError::ReadFailed);
            }
            Ok(Sample::from(channel.0) * 2 + self.offset)
        }
    }

    fn channels(raw: &[u8]) -> ChannelList {
        let ids: heapless::Vec<ChannelId, MAX_CHANNELS> =
            raw.iter().copied().map(ChannelId).collect();
        ChannelList::new(&ids).unwrap()
    }

    #[test]
    fn test_buffer_length_matches_channel_count() {
        let mut sampler = Sampler::new(channels(&[0, 1, 2]));
        assert_eq!(sampler.samples().len(), 3);

        sampler.capture(&mut TestSource::new(0)).unwrap();
        assert_eq!(sampler.samples().len(), 3);
    }

    #[test]
    fn test_readings_follow_channel_order() {
        let mut sampler = Sampler::new(channels(&[2, 0, 1]));
        sampler.capture(&mut TestSource::new(0)).unwrap();
        assert_eq!(sampler.samples(), &[4, 0, 2]);
    }

    #[test]
    fn test_capture_is_idempotent_for_unchanged_source() {
        let mut source = TestSource::new(7);
        let mut sampler = Sampler::new(channels(&[0, 1, 2]));

        sampler.capture(&mut source).unwrap();
        let first = encode_line(sampler.frame().values()).unwrap();

        sampler.capture(&mut source).unwrap();
        let second = encode_line(sampler.frame().values()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_capture_overwrites_in_place() {
        let mut sampler = Sampler::new(channels(&[0, 1]));

        sampler.capture(&mut TestSource::new(10)).unwrap();
        assert_eq!(sampler.samples(), &[10, 12]);

        sampler.capture(&mut TestSource::new(20)).unwrap();
        assert_eq!(sampler.samples(), &[20, 22]);
    }

    #[test]
    fn test_read_fault_aborts_frame() {
        let mut source = TestSource::new(0);
        source.fail_on = Some(ChannelId(1));

        let mut sampler = Sampler::new(channels(&[0, 1, 2]));
        let result = sampler.capture(&mut source);

        assert_eq!(result, Err(SourceError::ReadFailed));
        assert_eq!(sampler.samples().len(), 3);
    }

    #[test]
    fn test_frame_snapshots_buffer() {
        let mut sampler = Sampler::new(channels(&[3]));
        sampler.capture(&mut TestSource::new(1)).unwrap();

        let frame = sampler.frame();
        assert_eq!(frame.values(), &[7]);

        sampler.capture(&mut TestSource::new(100)).unwrap();
        assert_eq!(frame.values(), &[7]);
    }
}
