//! NIF interface for Elixir
//!
//! Provides Rustler NIFs that expose pulse generation. The pulse type
//! arrives as a string plus an optional parameter list, straight from
//! the host's parameter block.

use rustler::NifResult;

use crate::error::PulseError;
use crate::pulse_shapes::PulseType;
use crate::timing::FixedTiming;
use crate::traits::SymbolTiming;

fn to_nif_error(e: PulseError) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}

/// Generate pulse samples
///
/// # Arguments
/// * `sps` - Samples per symbol
/// * `ptype` - "rect", "tri" or "rcf"
/// * `pparms` - `[k]` or `[k, beta]` for "rcf", nil otherwise
#[rustler::nif]
pub fn pampt(sps: usize, ptype: String, pparms: Option<Vec<f64>>) -> NifResult<Vec<f64>> {
    let pparms = pparms.unwrap_or_default();
    crate::pampt(sps, &ptype, &pparms).map_err(to_nif_error)
}

/// Generate pulse samples with sps = sample_rate / baud_rate
#[rustler::nif]
pub fn pampt_for_rates(
    sample_rate: u32,
    baud_rate: u32,
    ptype: String,
    pparms: Option<Vec<f64>>,
) -> NifResult<Vec<f64>> {
    let timing = FixedTiming::new(sample_rate, baud_rate).map_err(to_nif_error)?;
    let pparms = pparms.unwrap_or_default();
    crate::pampt(timing.samples_per_symbol(), &ptype, &pparms).map_err(to_nif_error)
}

/// Generate a pulse along with the sample offset n of its first sample
///
/// Unlike `pampt/3`, unrecognized pulse types are an error here.
#[rustler::nif]
pub fn pulse(sps: usize, ptype: String, pparms: Option<Vec<f64>>) -> NifResult<(i64, Vec<f64>)> {
    let pparms = pparms.unwrap_or_default();
    let pulse_type = PulseType::from_parts(&ptype, &pparms)
        .map_err(to_nif_error)?
        .ok_or_else(|| rustler::Error::Term(Box::new(format!("unsupported pulse type: {}", ptype))))?;

    let pulse = pulse_type.build(sps).map_err(to_nif_error)?;
    Ok((pulse.first_offset() as i64, pulse.samples().to_vec()))
}
