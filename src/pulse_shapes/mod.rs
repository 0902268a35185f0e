//! Pulse shape implementations
//!
//! All PAM pulse families live here:
//! - Rectangular (one symbol period)
//! - Triangular (two symbol periods)
//! - Truncated sinc with optional raised-cosine roll-off
//!
//! `PulseType` selects one at runtime and builds it.

mod rect;
mod tri;
mod rcf;
mod impulse;


pub use rect::Rectangular;
pub use tri::Triangular;
pub use rcf::SincRolloff;
pub use impulse::Impulse;
pub use crate::utils::MAX_HALF_WIDTH;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PulseError, PulseResult};
use crate::traits::{PulseShape, SymbolTiming};

/// Default roll-off factor
pub const DEFAULT_ROLLOFF: f64 = 0.35;

/// Default truncation in symbol periods (each side)
pub const DEFAULT_SPAN: f64 = 6.0;

/// Pulse family selector with its shape parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum PulseType {
    Rect,
    Tri,
    /// Sinc truncated to `k` symbol periods each side, roll-off `beta`
    Rcf { k: f64, beta: Option<f64> },
}

impl Default for PulseType {
    fn default() -> Self {
        PulseType::Rcf {
            k: DEFAULT_SPAN,
            beta: Some(DEFAULT_ROLLOFF),
        }
    }
}

impl PulseType {
    /// Parse a pulse type name and positional shape parameters
    ///
    /// `rect` and `tri` match case-insensitively and ignore `pparms`.
    /// `rcf` must match exactly and takes `[k]` or `[k, beta]`.
    /// Unrecognized names give `Ok(None)`.
    pub fn from_parts(ptype: &str, pparms: &[f64]) -> PulseResult<Option<Self>> {
        if ptype.eq_ignore_ascii_case("rect") {
            return Ok(Some(PulseType::Rect));
        }
        if ptype.eq_ignore_ascii_case("tri") {
            return Ok(Some(PulseType::Tri));
        }
        if ptype == "rcf" {
            let k = *pparms
                .first()
                .ok_or_else(|| PulseError::invalid("k", "rcf requires pparms = [k] or [k, beta]"))?;
            let beta = pparms.get(1).copied();
            return Ok(Some(PulseType::Rcf { k, beta }));
        }
        Ok(None)
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            PulseType::Rect => "rect",
            PulseType::Tri => "tri",
            PulseType::Rcf { .. } => "rcf",
        }
    }

    /// Build the pulse for the given samples per symbol
    pub fn build(&self, samples_per_symbol: usize) -> PulseResult<Box<dyn PulseShape>> {
        let pulse: Box<dyn PulseShape> = match *self {
            PulseType::Rect => Box::new(Rectangular::new(samples_per_symbol)),
            PulseType::Tri => Box::new(Triangular::new(samples_per_symbol)),
            PulseType::Rcf { k, beta } => Box::new(SincRolloff::new(samples_per_symbol, k, beta)?),
        };

        debug!(
            ptype = self.name(),
            sps = samples_per_symbol,
            len = pulse.len(),
            first_offset = pulse.first_offset(),
            "built pulse"
        );

        Ok(pulse)
    }

    /// Build the pulse with samples per symbol taken from `timing`
    pub fn build_for_timing<T: SymbolTiming>(&self, timing: &T) -> PulseResult<Box<dyn PulseShape>> {
        self.build(timing.samples_per_symbol())
    }

    /// Generate the pulse samples
    pub fn generate(&self, samples_per_symbol: usize) -> PulseResult<Vec<f64>> {
        Ok(self.build(samples_per_symbol)?.samples().to_vec())
    }
}
