//! Sampler task
//!
//! The time-critical path: wait for the tick, capture one snapshot,
//! hand it to the transmit task through the bounded frame queue. The
//! transport is never awaited here, so a saturated UART shows up as a
//! growing drop counter instead of a stalled trigger.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use metron_core::config::StreamConfig;
use metron_core::sampler::Sampler;
use metron_core::stats::{StreamStats, TickAccounting};

use crate::channels::FRAME_QUEUE;
use crate::source::BoardAdc;

/// Ticks between statistics reports (10 s at the default 1 kHz)
const REPORT_EVERY_TICKS: u32 = 10_000;

/// Sampler task - one snapshot per trigger tick
#[embassy_executor::task]
pub async fn sampler_task(mut source: BoardAdc, mut sampler: Sampler, config: StreamConfig) {
    info!(
        "Sampler task started ({} channels, {}us interval)",
        sampler.channel_count(),
        config.interval_us
    );

    let mut ticker = Ticker::every(Duration::from_micros(u64::from(config.interval_us)));
    let origin = Instant::now();
    let mut accounting = TickAccounting::new(config.interval_us);
    let mut stats = StreamStats::default();
    let mut report_in = REPORT_EVERY_TICKS;

    loop {
        ticker.next().await;

        let missed = accounting.on_tick(origin.elapsed().as_micros());
        if missed > 0 {
            stats.record_missed(missed);
            warn!("{} trigger ticks missed", missed);
        }

        match sampler.capture(&mut source) {
            Ok(()) => {
                if FRAME_QUEUE.try_send(sampler.frame()).is_ok() {
                    stats.record_sampled();
                } else {
                    // Reject newest: queued frames are never overwritten
                    stats.record_dropped();
                }
            }
            Err(err) => {
                stats.record_fault();
                warn!("capture failed: {}", err);
            }
        }

        report_in -= 1;
        if report_in == 0 {
            report_in = REPORT_EVERY_TICKS;
            if stats.is_clean() {
                debug!("stream healthy: {} frames sampled", stats.frames_sampled);
            } else {
                warn!(
                    "stream degraded: {} sampled, {} dropped, {} ticks missed, {} faults",
                    stats.frames_sampled,
                    stats.frames_dropped,
                    stats.ticks_missed,
                    stats.capture_faults
                );
            }
        }
    }
}
