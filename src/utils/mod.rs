//! Numeric helpers shared by the pulse generators

mod math;

pub use math::*;
