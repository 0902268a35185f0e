//! Fixed symbol timing
//!
//! Derives samples per symbol from a sample rate and baud rate that
//! divide evenly.

use crate::error::{PulseError, PulseResult};
use crate::traits::SymbolTiming;

/// Fixed symbol timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTiming {
    sample_rate: u32,
    baud_rate: u32,
    samples_per_symbol: usize,
}

impl FixedTiming {
    /// Create fixed timing from sample and baud rates
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate Fs in Hz
    /// * `baud_rate` - Baud rate FB in symbols per second
    ///
    /// # Errors
    /// Either rate is zero, or Fs is not an integer multiple of FB.
    pub fn new(sample_rate: u32, baud_rate: u32) -> PulseResult<Self> {
        if sample_rate == 0 {
            return Err(PulseError::invalid("sample_rate", "must be positive"));
        }
        if baud_rate == 0 {
            return Err(PulseError::invalid("baud_rate", "must be positive"));
        }
        if sample_rate % baud_rate != 0 {
            return Err(PulseError::NonIntegerRatio {
                sample_rate,
                baud_rate,
            });
        }

        Ok(Self {
            sample_rate,
            baud_rate,
            samples_per_symbol: (sample_rate / baud_rate) as usize,
        })
    }
}

impl SymbolTiming for FixedTiming {
    fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}
