//! Error Types for Signal Conditioning
//!
//! ## Design Philosophy
//!
//! The conditioning components themselves cannot fail: smoothing, buffering
//! and rounding a finite sample is plain arithmetic. Errors only come from
//! two places:
//!
//! 1. **Configuration**: a smoothing coefficient, trend threshold or
//!    rounding precision that would break the component invariants. These
//!    are rejected when the component is built, never at sample time. A
//!    zero trend depth is a compile error, not a runtime one.
//!
//! 2. **Sample rejection**: [`SensorChannel`](crate::channel::SensorChannel)
//!    refuses NaN and infinite samples so a faulty sensor read cannot poison
//!    the filter state.
//!
//! Using a component before it has been seeded is not an error case. A
//! filter or trend buffer cannot be constructed without its first sample.
//!
//! ## Memory Layout
//!
//! Every variant carries at most one `f32`/`usize`, so the enum stays at
//! 16 bytes and implements `Copy` for cheap return from the sampling loop.

use thiserror_no_std::Error;

/// Result type for conditioning operations
pub type ConditioningResult<T> = Result<T, ConditioningError>;

/// Conditioning errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConditioningError {
    /// Sample is NaN or infinite
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Smoothing coefficient outside (0, 1]
    #[error("Smoothing coefficient {alpha} outside (0, 1]")]
    InvalidAlpha {
        /// The rejected coefficient
        alpha: f32,
    },

    /// Trend threshold negative or not finite
    #[error("Trend threshold {threshold} must be finite and non-negative")]
    InvalidThreshold {
        /// The rejected threshold
        threshold: f32,
    },

    /// More decimal places than an f32 can carry
    #[error("Precision of {places} decimal places exceeds maximum {max}")]
    InvalidPrecision {
        /// Requested number of decimal places
        places: u8,
        /// Largest supported number of decimal places
        max: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConditioningError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::InvalidAlpha { alpha } =>
                defmt::write!(fmt, "Alpha {} outside (0, 1]", alpha),
            Self::InvalidThreshold { threshold } =>
                defmt::write!(fmt, "Threshold {} invalid", threshold),
            Self::InvalidPrecision { places, max } =>
                defmt::write!(fmt, "Precision {} exceeds {}", places, max),
        }
    }
}
