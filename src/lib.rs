//! PAM Pulse - Sampled pulse shapes for PAM signal synthesis
//!
//! Generates the baseband pulse p(t) at t = n*TB/sps for the rectangular,
//! triangular and sinc (optionally raised-cosine shaped) families. All
//! modulation, filtering and plotting lives with the caller. Rust only
//! produces the sample sequence.

pub mod traits;
pub mod pulse_shapes;
pub mod timing;
pub mod error;
mod pampt;
mod utils;

#[cfg(feature = "nif")]
pub mod nif;

// Re-export core types for convenience
pub use traits::{PulseShape, SymbolTiming};
pub use pulse_shapes::{Impulse, PulseType, Rectangular, SincRolloff, Triangular};
pub use timing::FixedTiming;
pub use error::{PulseError, PulseResult};
pub use pampt::pampt;

#[cfg(feature = "nif")]
rustler::init!(
    "Elixir.PamPulse.Native",
    [
        nif::pampt,
        nif::pampt_for_rates,
        nif::pulse,
    ]
);
