//! Inter-task communication channels
//!
//! Defines the static queue between the capture and transmit tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use metron_core::sampler::SampleFrame;

/// Frame queue depth
///
/// Bounds the sampling-to-transmission latency to this many intervals.
/// On overflow the newest frame is rejected and counted as dropped;
/// queued frames are never overwritten.
pub const FRAME_QUEUE_DEPTH: usize = 8;

/// Captured frames awaiting serial transmission
pub static FRAME_QUEUE: Channel<CriticalSectionRawMutex, SampleFrame, FRAME_QUEUE_DEPTH> =
    Channel::new();
