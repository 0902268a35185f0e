//! Single-sample impulse
//!
//! Compatibility pulse returned by `pampt` for unrecognized pulse type
//! names. Not reachable through `PulseType`.

use crate::traits::PulseShape;

/// Unit impulse [1.0] at n = 0
#[derive(Debug, Clone, PartialEq)]
pub struct Impulse {
    samples: [f64; 1],
    /// Informational only, the samples do not depend on it
    samples_per_symbol: usize,
}

impl Impulse {
    pub fn new(samples_per_symbol: usize) -> Self {
        Self {
            samples: [1.0],
            samples_per_symbol,
        }
    }
}

impl PulseShape for Impulse {
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
