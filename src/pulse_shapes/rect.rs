//! Rectangular pulse
//!
//! Constant 1.0 over one symbol period, n in [0, sps).

use crate::traits::PulseShape;

/// Rectangular (NRZ) pulse
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangular {
    samples: Vec<f64>,
    samples_per_symbol: usize,
}

impl Rectangular {
    pub fn new(samples_per_symbol: usize) -> Self {
        Self {
            samples: vec![1.0; samples_per_symbol],
            samples_per_symbol,
        }
    }
}

impl PulseShape for Rectangular {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn first_offset(&self) -> isize {
        0
    }

    fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
}
