//! Symbol timing implementations
//!
//! Currently only fixed timing (integer sample/baud ratio).

mod fixed;

pub use fixed::FixedTiming;
