//! Pulse generation error types

use thiserror::Error;

/// Result type for pulse generation
pub type PulseResult<T> = Result<T, PulseError>;

/// Errors that can occur while building a pulse
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PulseError {
    /// A shape parameter is missing or unusable
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Sample rate is not an integer multiple of the baud rate
    #[error("sample rate {sample_rate} must be integer multiple of baud rate {baud_rate}")]
    NonIntegerRatio { sample_rate: u32, baud_rate: u32 },
}

impl PulseError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PulseError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if any
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PulseError::InvalidParameter { name, .. } => Some(name),
            PulseError::NonIntegerRatio { .. } => None,
        }
    }
}
