//! SymbolTiming trait - Sample/baud rate relationship
//!
//! sps = Fs/FB. Pulses are generated per symbol period, so only the
//! integer ratio matters to the generators.

/// Symbol timing trait
pub trait SymbolTiming: Send + Sync {
    /// Samples per symbol period
    fn samples_per_symbol(&self) -> usize;

    /// Sample rate in Hz
    fn sample_rate(&self) -> u32;

    /// Baud rate in symbols per second
    fn baud_rate(&self) -> u32;
}
