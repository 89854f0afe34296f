//! RP2040 ADC adapter
//!
//! Implements the core `AnalogSource` trait over the on-chip ADC in
//! blocking mode. The input table pairs each configured channel id
//! with its sampling handle; the pairing is fixed in `main`.

use embassy_rp::adc::{Adc, Blocking, Channel};

use metron_core::config::{ChannelId, MAX_CHANNELS};
use metron_core::sampler::Sample;
use metron_core::traits::{AnalogSource, SourceError};

/// On-chip ADC with its configured input table
pub struct BoardAdc {
    adc: Adc<'static, Blocking>,
    inputs: heapless::Vec<(ChannelId, Channel<'static>), MAX_CHANNELS>,
}

impl BoardAdc {
    pub fn new(
        adc: Adc<'static, Blocking>,
        inputs: heapless::Vec<(ChannelId, Channel<'static>), MAX_CHANNELS>,
    ) -> Self {
        Self { adc, inputs }
    }
}

impl AnalogSource for BoardAdc {
    fn read(&mut self, channel: ChannelId) -> Result<Sample, SourceError> {
        let input = self
            .inputs
            .iter_mut()
            .find(|(id, _)| *id == channel)
            .map(|(_, input)| input)
            .ok_or(SourceError::UnknownChannel)?;
        let raw = self
            .adc
            .blocking_read(input)
            .map_err(|_| SourceError::ReadFailed)?;
        // 12-bit conversion, always fits the sample type
        Ok(raw as Sample)
    }
}
