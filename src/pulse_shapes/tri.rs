//! Triangular pulse
//!
//! Linear ramp over n in [-sps, sps), peak 1.0 at n = 0. The interval is
//! half-open, so n = -sps gives exactly 0 while the last sample n = sps-1
//! gives 1/sps.

use crate::traits::PulseShape;

/// Triangular pulse, two symbol periods wide
#[derive(Debug, Clone, PartialEq)]
pub struct Triangular {
    samples: Vec<f64>,
    samples_per_symbol: usize,
}

impl Triangular {
    pub fn new(samples_per_symbol: usize) -> Self {
        let sps = samples_per_symbol as isize;
        let scale = samples_per_symbol as f64;

        let samples = (-sps..sps)
            .map(|n| {
                let ramp = n as f64 / scale;
                if n < 0 {
                    1.0 + ramp
                } else {
                    1.0 - ramp
                }
            })
            .collect();

        Self {
            samples,
            samples_per_symbol,
        }
    }
}

impl PulseShape for Triangular {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn first_offset(&self) -> isize {
        -(self.samples_per_symbol as isize)
    }

    fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
}
