//! Small DSP math helpers

use std::f64::consts::PI;

use crate::error::{PulseError, PulseResult};

/// Largest truncation half-width nk, in samples
pub const MAX_HALF_WIDTH: usize = 1 << 24;

/// Normalized sinc: sin(pi*x)/(pi*x), 1 at x = 0
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Raised-cosine roll-off factor cos(pi*a)/(1 - (2a)^2), a = beta*n/sps
///
/// At (2a)^2 == 1 the expression is 0/0; its limit there is pi/4.
#[inline]
pub fn rolloff_factor(at_fb: f64) -> f64 {
    let at_fb2 = (2.0 * at_fb).powi(2);
    if at_fb2 == 1.0 {
        0.25 * PI
    } else {
        (PI * at_fb).cos() / (1.0 - at_fb2)
    }
}

/// Truncation half-width in samples, round(k*sps) with ties to even
///
/// Negative spans collapse to zero. Non-finite `k` and spans wider than
/// `MAX_HALF_WIDTH` are rejected.
pub fn half_width(k: f64, samples_per_symbol: usize) -> PulseResult<usize> {
    if !k.is_finite() {
        return Err(PulseError::invalid("k", format!("must be finite, got {}", k)));
    }

    let nk = (k * samples_per_symbol as f64).round_ties_even();
    if nk > MAX_HALF_WIDTH as f64 {
        return Err(PulseError::invalid(
            "k",
            format!(
                "round(k*sps) = {} exceeds {} samples each side",
                nk, MAX_HALF_WIDTH
            ),
        ));
    }

    Ok(if nk > 0.0 { nk as usize } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinc() {
        assert_eq!(sinc(0.0), 1.0);
        assert!(sinc(1.0).abs() < 1e-15);
        assert!(sinc(-2.0).abs() < 1e-15);
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-12);
        assert!((sinc(0.25) - sinc(-0.25)).abs() < 1e-15);
    }

    #[test]
    fn test_rolloff_singularity() {
        assert_eq!(rolloff_factor(0.5), PI / 4.0);
        assert_eq!(rolloff_factor(-0.5), PI / 4.0);
        assert!(rolloff_factor(0.5).is_finite());
    }

    #[test]
    fn test_rolloff_regular() {
        assert_eq!(rolloff_factor(0.0), 1.0);
        let a: f64 = 0.2;
        let expected = (PI * a).cos() / (1.0 - 4.0 * a * a);
        assert!((rolloff_factor(a) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_half_width_ties_to_even() {
        assert_eq!(half_width(3.0, 8), Ok(24));
        assert_eq!(half_width(0.5, 5), Ok(2)); // 2.5 -> 2
        assert_eq!(half_width(1.5, 1), Ok(2)); // 1.5 -> 2
        assert_eq!(half_width(-1.0, 8), Ok(0));
        assert_eq!(half_width(2.0, 0), Ok(0));
    }

    #[test]
    fn test_half_width_limits() {
        assert_eq!(half_width(MAX_HALF_WIDTH as f64, 1), Ok(MAX_HALF_WIDTH));
        for k in [MAX_HALF_WIDTH as f64 + 1.0, 1e18, 1e300, f64::NAN, f64::INFINITY] {
            let err = half_width(k, 8).unwrap_err();
            assert_eq!(err.parameter(), Some("k"), "k = {}", k);
        }
        assert_eq!(half_width(-1e300, 8), Ok(0));
    }
}
