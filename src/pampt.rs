//! Loosely typed pulse front door
//!
//! `pampt(sps, ptype, pparms)` takes the pulse family as a name and its
//! shape parameters as a positional list, the way a host parameter block
//! supplies them. Prefer `PulseType` in Rust code.

use tracing::warn;

use crate::error::PulseResult;
use crate::pulse_shapes::{Impulse, PulseType};
use crate::traits::PulseShape;

/// PAM pulse p(t) sampled at t = n*TB/sps
///
/// # Arguments
/// * `sps` - Samples per symbol, Fs/FB
/// * `ptype` - `"rect"`, `"tri"` or `"rcf"`
/// * `pparms` - Ignored for `rect`/`tri`, `[k]` or `[k, beta]` for `rcf`
///
/// An unrecognized `ptype` returns the single sample `[1.0]`. This is a
/// compatibility path, not a selectable pulse.
///
/// # Errors
/// `rcf` without `k`, with a non-finite `k`, or with round(k*sps) too
/// wide to index.
pub fn pampt(sps: usize, ptype: &str, pparms: &[f64]) -> PulseResult<Vec<f64>> {
    match PulseType::from_parts(ptype, pparms)? {
        Some(pulse_type) => pulse_type.generate(sps),
        None => {
            warn!(ptype, "unrecognized pulse type, returning unit impulse");
            Ok(Impulse::new(sps).samples().to_vec())
        }
    }
}
