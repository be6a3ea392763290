//! Channel configuration
//!
//! All tunables of one conditioning channel in a single `Copy` value. The
//! fields interact: the smoothing time constant and the trend window are
//! both measured in samples, so they only mean something once multiplied by
//! the sampling interval. [`ConditioningConfig::filter_time_constant_ms`]
//! and [`ConditioningConfig::trend_window_ms`] do that multiplication so the
//! pair can be tuned together.

use crate::{
    constants::{
        filter::{DEFAULT_ALPHA, HEAVY_ALPHA, RESPONSIVE_ALPHA},
        rounding::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES},
        time::{
            DEFAULT_SAMPLE_INTERVAL_MS, HIGH_FREQ_SAMPLE_INTERVAL_MS,
            LOW_FREQ_SAMPLE_INTERVAL_MS,
        },
        trend::{TREND_THRESHOLD_C, TREND_THRESHOLD_PCT},
    },
    errors::{ConditioningError, ConditioningResult},
    filter::Alpha,
};

/// Tunables for one sensor channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditioningConfig {
    /// Smoothing coefficient
    pub alpha: Alpha,

    /// Minimum change over the trend window to report a direction
    pub trend_threshold: f32,

    /// Decimal places of the rounded raw value
    pub decimal_places: u8,

    /// Nominal time between samples in milliseconds
    pub sample_interval_ms: u32,
}

impl Default for ConditioningConfig {
    fn default() -> Self {
        Self {
            alpha: Alpha::from_const(DEFAULT_ALPHA),
            trend_threshold: TREND_THRESHOLD_C,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl ConditioningConfig {
    /// Create a config from raw values, checking every field
    pub fn new(
        alpha: f32,
        trend_threshold: f32,
        decimal_places: u8,
        sample_interval_ms: u32,
    ) -> ConditioningResult<Self> {
        let config = Self {
            alpha: Alpha::new(alpha)?,
            trend_threshold,
            decimal_places,
            sample_interval_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Indoor air: heavy smoothing at the default interval
    pub fn indoor() -> Self {
        Self {
            alpha: Alpha::from_const(HEAVY_ALPHA),
            ..Self::default()
        }
    }

    /// Relative humidity channel: wider threshold for noisier sensors
    pub fn humidity() -> Self {
        Self {
            trend_threshold: TREND_THRESHOLD_PCT,
            ..Self::default()
        }
    }

    /// Light smoothing that follows steps within a few samples
    pub fn responsive() -> Self {
        Self {
            alpha: Alpha::from_const(RESPONSIVE_ALPHA),
            ..Self::default()
        }
    }

    /// 10 Hz sampling with heavy smoothing
    pub fn fast_sampling() -> Self {
        Self {
            alpha: Alpha::from_const(HEAVY_ALPHA),
            sample_interval_ms: HIGH_FREQ_SAMPLE_INTERVAL_MS,
            ..Self::default()
        }
    }

    /// One sample per minute; each sample carries more weight
    pub fn low_power() -> Self {
        Self {
            alpha: Alpha::from_const(RESPONSIVE_ALPHA),
            sample_interval_ms: LOW_FREQ_SAMPLE_INTERVAL_MS,
            ..Self::default()
        }
    }

    /// Builder-style threshold override
    pub fn with_trend_threshold(mut self, threshold: f32) -> Self {
        self.trend_threshold = threshold;
        self
    }

    /// Builder-style precision override
    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.decimal_places = places;
        self
    }

    /// Check the invariants the channel relies on
    ///
    /// Threshold and precision are public fields and can be set to anything,
    /// so the channel re-runs this on creation. `Alpha` is valid by type.
    pub fn validate(&self) -> ConditioningResult<()> {
        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(ConditioningError::InvalidThreshold {
                threshold: self.trend_threshold,
            });
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConditioningError::InvalidPrecision {
                places: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }

        Ok(())
    }

    /// Wall-clock span covered by a trend window of `depth` samples
    pub fn trend_window_ms(&self, depth: usize) -> u64 {
        depth as u64 * u64::from(self.sample_interval_ms)
    }

    /// Time for the filter to cover ~63% of a step, in milliseconds
    ///
    /// First-order approximation `interval / α`, close for small α.
    pub fn filter_time_constant_ms(&self) -> f32 {
        self.sample_interval_ms as f32 / self.alpha.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::trend::TREND_DEPTH;

    #[test]
    fn default_config_is_valid() {
        let config = ConditioningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.alpha.get(), DEFAULT_ALPHA);
        assert_eq!(config.trend_threshold, TREND_THRESHOLD_C);
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            ConditioningConfig::indoor(),
            ConditioningConfig::humidity(),
            ConditioningConfig::responsive(),
            ConditioningConfig::fast_sampling(),
            ConditioningConfig::low_power(),
        ] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn indoor_smooths_harder_than_default() {
        let indoor = ConditioningConfig::indoor();
        assert_eq!(indoor.alpha.get(), HEAVY_ALPHA);
        assert!(indoor.alpha.get() < ConditioningConfig::default().alpha.get());
        assert_eq!(indoor.sample_interval_ms, DEFAULT_SAMPLE_INTERVAL_MS);
        assert!(indoor.filter_time_constant_ms() > ConditioningConfig::default().filter_time_constant_ms());
    }

    #[test]
    fn checked_constructor() {
        assert!(ConditioningConfig::new(0.1, 0.2, 2, 1000).is_ok());
        assert_eq!(
            ConditioningConfig::new(1.5, 0.2, 2, 1000),
            Err(ConditioningError::InvalidAlpha { alpha: 1.5 })
        );
        assert_eq!(
            ConditioningConfig::new(0.1, -1.0, 2, 1000),
            Err(ConditioningError::InvalidThreshold { threshold: -1.0 })
        );
        assert_eq!(
            ConditioningConfig::new(0.1, 0.2, 7, 1000),
            Err(ConditioningError::InvalidPrecision { places: 7, max: MAX_DECIMAL_PLACES })
        );
    }

    #[test]
    fn builder_overrides_are_validated() {
        let config = ConditioningConfig::default().with_trend_threshold(f32::NAN);
        assert!(config.validate().is_err());

        let config = ConditioningConfig::default().with_decimal_places(2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn window_scales_with_interval() {
        let config = ConditioningConfig::default();
        assert_eq!(config.trend_window_ms(TREND_DEPTH), 20_000);

        let fast = ConditioningConfig::fast_sampling();
        assert_eq!(fast.trend_window_ms(TREND_DEPTH), 1_000);
    }

    #[test]
    fn time_constant() {
        let config = ConditioningConfig::new(0.5, 0.1, 1, 1000).unwrap();
        assert_eq!(config.filter_time_constant_ms(), 2000.0);
    }
}
