//! Exponential Smoothing Constants
//!
//! The smoothing coefficient α sets how much weight a new sample gets
//! against the filter history. The effective time constant of the filter is
//! roughly `sample_interval / α`, so these values only make sense together
//! with the sampling interval in [`super::time`].

/// Default smoothing coefficient.
///
/// Heavy smoothing for slow environmental signals (room temperature,
/// humidity). At a 2 s sampling interval the filter settles to 63% of a
/// step in about 28 s.
///
/// Source: Field tuning on DHT-class sensors with ±0.5°C read noise
pub const DEFAULT_ALPHA: f32 = 0.07;

/// Smoothing coefficient for responsive channels.
///
/// Tracks a step within a handful of samples while still cutting single
/// sample spikes to a third.
pub const RESPONSIVE_ALPHA: f32 = 0.3;

/// Smoothing coefficient for very noisy or very fast sampled channels.
pub const HEAVY_ALPHA: f32 = 0.02;

/// Fallback seed value for a filter with no first sample (°C).
///
/// Typical indoor temperature. Seeding with this instead of a real sample
/// makes the first outputs drift towards the real value over several time
/// constants, so use it only when no first reading is available.
pub const DEFAULT_SEED_C: f32 = 22.0;
