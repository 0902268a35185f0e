//! Truncated sinc pulse with optional raised-cosine roll-off
//!
//! p(n) = sinc(n/sps) * cos(pi*a)/(1 - (2a)^2), a = beta*n/sps, for
//! n in [-nk, nk) with nk = round(k*sps). Without beta the roll-off
//! factor is dropped and the pulse is the bare truncated sinc.

use crate::error::PulseResult;
use crate::traits::PulseShape;
use crate::utils::{half_width, rolloff_factor, sinc};

/// Sinc pulse truncated to k symbol periods each side of center
#[derive(Debug, Clone, PartialEq)]
pub struct SincRolloff {
    samples: Vec<f64>,
    half_width: usize,
    samples_per_symbol: usize,
    beta: Option<f64>,
}

impl SincRolloff {
    /// Create a truncated sinc pulse
    ///
    /// # Arguments
    /// * `samples_per_symbol` - Number of samples per symbol period
    /// * `k` - Tail truncation, in symbol periods each side of center
    /// * `beta` - Roll-off factor, `None` for a pure sinc
    ///
    /// # Errors
    /// `k` is not finite, or round(k*sps) exceeds `MAX_HALF_WIDTH`.
    /// A non-finite `beta` is not checked and yields NaN samples.
    pub fn new(samples_per_symbol: usize, k: f64, beta: Option<f64>) -> PulseResult<Self> {
        let nk = half_width(k, samples_per_symbol)?;
        let samples = generate_rcf_samples(samples_per_symbol, nk, beta);

        Ok(Self {
            samples,
            half_width: nk,
            samples_per_symbol,
            beta,
        })
    }

    /// Truncation half-width nk in samples
    pub fn half_width(&self) -> usize {
        self.half_width
    }

    pub fn beta(&self) -> Option<f64> {
        self.beta
    }
}

impl PulseShape for SincRolloff {
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn first_offset(&self) -> isize {
        -(self.half_width as isize)
    }

    fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
}

fn generate_rcf_samples(samples_per_symbol: usize, nk: usize, beta: Option<f64>) -> Vec<f64> {
    let nk = nk as isize;
    let sps = samples_per_symbol as f64;

    (-nk..nk)
        .map(|n| {
            let n = n as f64;
            let p = sinc(n / sps);
            match beta {
                Some(beta) => p * rolloff_factor(beta / sps * n),
                None => p,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rcf_length() {
        let rcf = SincRolloff::new(8, 3.0, Some(0.35)).unwrap();
        // 2 * round(3 * 8) = 48 taps
        assert_eq!(rcf.len(), 48);
        assert_eq!(rcf.half_width(), 24);
        assert_eq!(rcf.offsets(), -24..24);
    }

    #[test]
    fn test_rcf_center_is_one() {
        let sinc_only = SincRolloff::new(8, 3.0, None).unwrap();
        assert_eq!(sinc_only.at(0), Some(1.0));

        let shaped = SincRolloff::new(8, 3.0, Some(0.5)).unwrap();
        assert_eq!(shaped.at(0), Some(1.0));
    }

    #[test]
    fn test_rcf_zero_crossings_at_symbol_multiples() {
        let rcf = SincRolloff::new(4, 4.0, None).unwrap();
        for m in [-4isize, -3, -2, -1, 1, 2, 3] {
            let v = rcf.at(m * 4).unwrap();
            assert!(v.abs() < 1e-12, "Nonzero at n = {}: {}", m * 4, v);
        }
    }

    #[test]
    fn test_rcf_singularity_uses_limit() {
        // beta/sps * n = 0.5 at n = 4, so (2a)^2 == 1
        let sps = 4;
        let beta = 0.5;
        let bare = SincRolloff::new(sps, 2.0, None).unwrap();
        let shaped = SincRolloff::new(sps, 2.0, Some(beta)).unwrap();

        for n in [-4isize, 4] {
            let v = shaped.at(n).unwrap();
            assert!(v.is_finite());
            assert_eq!(v, bare.at(n).unwrap() * PI / 4.0);
        }
        assert!(shaped.samples().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_rcf_matches_closed_form() {
        let sps = 5;
        let beta = 0.3;
        let rcf = SincRolloff::new(sps, 2.0, Some(beta)).unwrap();

        for n in rcf.offsets() {
            let t = n as f64 / sps as f64;
            let a = beta * t;
            let expected = if n == 0 {
                1.0
            } else {
                (PI * t).sin() / (PI * t) * (PI * a).cos() / (1.0 - 4.0 * a * a)
            };
            let got = rcf.at(n).unwrap();
            assert!(
                (got - expected).abs() < 1e-12,
                "Mismatch at n = {}: {} vs {}",
                n,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_rcf_negative_k_is_empty() {
        let rcf = SincRolloff::new(8, -1.0, Some(0.35)).unwrap();
        assert!(rcf.is_empty());
    }

    #[test]
    fn test_rcf_rejects_non_finite_k() {
        let err = SincRolloff::new(8, f64::NAN, None).unwrap_err();
        assert_eq!(err.parameter(), Some("k"));
    }

    #[test]
    fn test_rcf_rejects_oversized_span() {
        for k in [1e18, 1e300] {
            let err = SincRolloff::new(8, k, None).unwrap_err();
            assert_eq!(err.parameter(), Some("k"), "k = {}", k);
        }
    }

    #[test]
    fn test_rcf_first_offset_is_minus_half_width() {
        let rcf = SincRolloff::new(8, 2.5, Some(0.35)).unwrap();
        assert_eq!(rcf.first_offset(), -20);
        assert_eq!(rcf.offsets().end, 20);
    }

    #[test]
    fn test_rcf_non_finite_beta_gives_nan() {
        let rcf = SincRolloff::new(8, 2.0, Some(f64::NAN)).unwrap();
        assert_eq!(rcf.len(), 32);
        assert!(rcf.samples().iter().all(|x| x.is_nan()));
    }
}
