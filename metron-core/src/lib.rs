//! Board-agnostic core logic for the Metron sampling firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (analog source)
//! - Channel and stream configuration with startup validation
//! - Sampler and reusable sample buffer
//! - Line encoder for the serial wire format
//! - Stream statistics and tick accounting

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod encode;
pub mod sampler;
pub mod stats;
pub mod traits;
