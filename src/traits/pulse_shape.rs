//! PulseShape trait - Sampled pulse p(n*TB/sps)
//!
//! A pulse is a finite run of samples starting at some integer offset n.
//! Rectangular pulses start at n = 0, centered pulses start at a negative
//! offset so that n = 0 lands on the peak.

use std::ops::Range;

/// Sampled PAM pulse
///
/// Implementations own the samples and know where they sit on the
/// sample grid. Everything else is derived.
pub trait PulseShape: Send + Sync {
    /// Pulse samples in ascending n order
    fn samples(&self) -> &[f64];

    /// Sample offset n of the first sample
    fn first_offset(&self) -> isize;

    /// Samples per symbol the pulse was generated for
    fn samples_per_symbol(&self) -> usize;

    /// Number of samples
    fn len(&self) -> usize {
        self.samples().len()
    }

    fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Half-open range of sample offsets covered by the pulse
    fn offsets(&self) -> Range<isize> {
        let start = self.first_offset();
        start..start + self.len() as isize
    }

    /// Value at sample offset `n`, or `None` outside the pulse
    fn at(&self, n: isize) -> Option<f64> {
        let idx = n.checked_sub(self.first_offset())?;
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.samples().get(i).copied())
    }

    /// Sample times in symbol periods (t/TB = n/sps)
    fn time_axis(&self) -> Vec<f64> {
        let sps = self.samples_per_symbol() as f64;
        self.offsets().map(|n| n as f64 / sps).collect()
    }

    /// Pulse energy (sum of squared samples)
    fn energy(&self) -> f64 {
        self.samples().iter().map(|x| x * x).sum()
    }
}
