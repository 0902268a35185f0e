//! Core traits for pulse generation
//!
//! These traits describe sampled waveforms and sample/baud timing,
//! not any particular modulation scheme.

mod pulse_shape;
mod timing;

pub use pulse_shape::PulseShape;
pub use timing::SymbolTiming;
