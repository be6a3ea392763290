//! Exponential Smoothing Filter
//!
//! ## Overview
//!
//! A single-pole IIR low-pass filter: each output is a weighted blend of the
//! new sample and the previous output.
//!
//! ```text
//! filtered' = α · raw + (1 - α) · filtered
//! ```
//!
//! One `f32` of state, O(1) per sample, no history buffer. Smaller α means
//! stronger smoothing and slower response.
//!
//! ## Seeding
//!
//! The filter state must start from a real sample, otherwise the first
//! outputs are pulled towards whatever the initial value was. A
//! [`SmoothingFilter`] therefore cannot be built without its first sample.
//! There is no "update before init" state to guard against.
//!
//! [`SmoothingFilter::with_default_seed`] exists for callers that must start
//! filtering before any reading is available; it seeds with
//! [`DEFAULT_SEED_C`] and accepts the warm-up drift that comes with it.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorcond_core::filter::{Alpha, SmoothingFilter};
//!
//! let alpha = Alpha::new(0.5)?;
//! let mut filter = SmoothingFilter::new(alpha, 20.0);
//!
//! assert_eq!(filter.update(22.0), 21.0);
//! assert_eq!(filter.update(22.0), 21.5);
//! # Ok::<(), sensorcond_core::ConditioningError>(())
//! ```

use crate::{
    constants::filter::{DEFAULT_ALPHA, DEFAULT_SEED_C},
    errors::{ConditioningError, ConditioningResult},
};

/// Smoothing coefficient, guaranteed to lie in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Alpha(f32);

impl Alpha {
    /// Validate a raw coefficient
    ///
    /// NaN fails the range comparison and is rejected with the rest.
    pub fn new(alpha: f32) -> ConditioningResult<Self> {
        if alpha > 0.0 && alpha <= 1.0 {
            Ok(Self(alpha))
        } else {
            Err(ConditioningError::InvalidAlpha { alpha })
        }
    }

    /// Wrap a coefficient known to be in range (crate constants only)
    pub(crate) const fn from_const(alpha: f32) -> Self {
        Self(alpha)
    }

    /// The coefficient value
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Pass-through coefficient: output follows the latest sample
    pub const fn unfiltered() -> Self {
        Self(1.0)
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(DEFAULT_ALPHA)
    }
}

impl TryFrom<f32> for Alpha {
    type Error = ConditioningError;

    fn try_from(alpha: f32) -> Result<Self, Self::Error> {
        Self::new(alpha)
    }
}

impl From<Alpha> for f32 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

/// Exponential smoothing filter state for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothingFilter {
    alpha: Alpha,
    filtered: f32,
}

impl SmoothingFilter {
    /// Create a filter seeded with the first valid sample
    pub const fn new(alpha: Alpha, first_sample: f32) -> Self {
        Self {
            alpha,
            filtered: first_sample,
        }
    }

    /// Create a filter seeded with [`DEFAULT_SEED_C`] instead of a reading
    pub const fn with_default_seed(alpha: Alpha) -> Self {
        Self::new(alpha, DEFAULT_SEED_C)
    }

    /// Restart the filter from a new first sample, dropping its history
    pub fn reseed(&mut self, first_sample: f32) {
        self.filtered = first_sample;
    }

    /// Blend `raw` into the filter and return the new filtered value
    ///
    /// `raw` must be finite; the filter does not check.
    ///
    /// Computed in increment form, `filtered + α · (raw - filtered)`, which
    /// is the same blend but returns `filtered` exactly when `raw` equals it.
    /// The result is kept between the previous value and `raw` so f32
    /// rounding can never overshoot the sample.
    pub fn update(&mut self, raw: f32) -> f32 {
        let previous = self.filtered;
        let blended = previous + self.alpha.get() * (raw - previous);
        let (lo, hi) = if previous <= raw { (previous, raw) } else { (raw, previous) };

        // NaN fails both comparisons and propagates
        self.filtered = if blended < lo {
            lo
        } else if blended > hi {
            hi
        } else {
            blended
        };
        self.filtered
    }

    /// Current filtered value
    pub const fn value(&self) -> f32 {
        self.filtered
    }

    /// Smoothing coefficient in use
    pub const fn alpha(&self) -> Alpha {
        self.alpha
    }
}
