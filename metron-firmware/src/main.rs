//! Metron - Analog Sampling Telemetry Firmware
//!
//! Main firmware binary for RP2040-based boards. Samples a fixed set
//! of ADC channels at a fixed interval and streams each snapshot as
//! one space-separated text line over UART.
//!
//! Named after the Greek "metron" (μέτρον) meaning "measure" -
//! one measurement per tick, one line per measurement.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use metron_core::config::{ChannelId, MAX_CHANNELS};
use metron_core::sampler::Sampler;

use crate::source::BoardAdc;

mod channels;
mod config;
mod source;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Metron firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Configuration errors are fatal: refuse to start rather than
    // stream with a broken configuration
    let stream_config = config::stream_config();
    let channel_list = match config::channel_list() {
        Ok(list) => list,
        Err(err) => panic!("channel list rejected: {}", err),
    };
    if let Err(err) = stream_config.validate(channel_list.len()) {
        panic!("stream config rejected: {}", err);
    }
    info!(
        "Streaming {} channels every {}us at {} baud",
        channel_list.len(),
        stream_config.interval_us,
        stream_config.baud
    );

    // UART TX carries the sample stream; RX is unused
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = stream_config.baud;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    // On-chip ADC in blocking mode; one conversion takes ~2us, well
    // inside the sampling interval. The input table pairs each channel
    // id with its pin: ADC0..ADC2 = GPIO26..GPIO28.
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let mut inputs: heapless::Vec<(ChannelId, AdcChannel<'static>), MAX_CHANNELS> =
        heapless::Vec::new();
    for entry in [
        (ChannelId(0), AdcChannel::new_pin(p.PIN_26, Pull::None)),
        (ChannelId(1), AdcChannel::new_pin(p.PIN_27, Pull::None)),
        (ChannelId(2), AdcChannel::new_pin(p.PIN_28, Pull::None)),
    ] {
        if inputs.push(entry).is_err() {
            panic!("ADC input table overflow");
        }
    }
    let source = BoardAdc::new(adc, inputs);

    let sampler = Sampler::new(channel_list);

    unwrap!(spawner.spawn(tasks::sampler_task(source, sampler, stream_config)));
    unwrap!(spawner.spawn(tasks::serial_tx_task(tx)));

    // The executor owns the tasks from here; the main body idles
    info!("Metron running");
}
