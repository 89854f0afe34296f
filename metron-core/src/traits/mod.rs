//! Hardware abstraction traits
//!
//! These traits define the interface between the sampling logic and
//! hardware-specific implementations.

pub mod analog;

pub use analog::{AnalogSource, SourceError};
