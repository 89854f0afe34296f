//! Serial transmit task
//!
//! Drains the frame queue, encodes each snapshot, and writes the line
//! into the buffered UART. Blocking on a full UART buffer is confined
//! to this task; the sampler keeps its cadence.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use metron_core::encode::encode_line;

use crate::channels::FRAME_QUEUE;

/// Serial TX task - one wire line per received frame
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx<'static, UART0>) {
    info!("Serial TX task started");

    loop {
        let frame = FRAME_QUEUE.receive().await;
        match encode_line(frame.values()) {
            Ok(line) => {
                if let Err(err) = tx.write_all(line.as_bytes()).await {
                    warn!("serial write failed: {:?}", err);
                }
            }
            // Unreachable with a validated channel list
            Err(err) => warn!("encode failed: {}", err),
        }
    }
}
