//! Per-sensor conditioning channel
//!
//! [`SensorChannel`] runs one sampling cycle at a time:
//!
//! ```text
//! raw ─┬─> round_to_decimals ─┬──────────────> rounded
//!      │                      └─> SmoothingFilter::update ─> filtered
//!      └─> TrendBuffer::add ─> classify ───────────────────> trend
//! ```
//!
//! The filter smooths the rounded value, so sub-resolution jitter below
//! the configured precision never reaches it. The trend buffer sees the
//! raw sample.
//!
//! The channel owns its filter and trend buffer, so a device with a
//! temperature and a humidity sensor simply holds two channels. Neither
//! component exists until the first valid sample arrives; that sample seeds
//! both of them.
//!
//! Unlike the bare components, the channel checks its input: a NaN or
//! infinite sample is rejected and leaves the state untouched. Rejected
//! samples do not advance the trend buffer, so the trend window stretches
//! over the skipped cycles.

use crate::{
    config::ConditioningConfig,
    constants::trend::TREND_DEPTH,
    errors::{ConditioningError, ConditioningResult},
    filter::SmoothingFilter,
    rounding::round_to_decimals,
    trend::{Trend, TrendBuffer},
};

/// Physical quantity a channel measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quantity {
    /// Air temperature in °C
    Temperature,
    /// Relative humidity in %
    Humidity,
}

impl Quantity {
    /// Display unit
    pub const fn unit(self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Humidity => "%",
        }
    }

    /// Lowercase name, as used in telemetry payloads
    pub const fn as_str(self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Humidity => "humidity",
        }
    }

    /// Recommended configuration for this quantity
    pub fn default_config(self) -> ConditioningConfig {
        match self {
            Quantity::Temperature => ConditioningConfig::default(),
            Quantity::Humidity => ConditioningConfig::humidity(),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one sampling cycle, handed to display and telemetry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionedReading {
    /// What was measured
    pub quantity: Quantity,
    /// Sample as read
    pub raw: f32,
    /// Sample rounded to the configured precision
    pub rounded: f32,
    /// Smoothed rounded value after this sample
    pub filtered: f32,
    /// Direction over the trend window
    pub trend: Trend,
}

#[derive(Debug, Clone)]
struct Conditioners<const N: usize> {
    filter: SmoothingFilter,
    trend: TrendBuffer<N>,
}

impl<const N: usize> Conditioners<N> {
    fn seed(raw: f32, rounded: f32, config: &ConditioningConfig) -> ConditioningResult<Self> {
        Ok(Self {
            filter: SmoothingFilter::new(config.alpha, rounded),
            trend: TrendBuffer::new(raw, config.trend_threshold)?,
        })
    }
}

/// Conditioning state of one sensor
///
/// `N` is the trend window depth, [`TREND_DEPTH`] unless chosen otherwise.
/// A zero depth fails to build:
///
/// ```compile_fail
/// use sensorcond_core::{ConditioningConfig, Quantity, SensorChannel};
///
/// let channel = SensorChannel::<0>::new(Quantity::Temperature, ConditioningConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct SensorChannel<const N: usize = TREND_DEPTH> {
    quantity: Quantity,
    config: ConditioningConfig,
    state: Option<Conditioners<N>>,
    last_trend: Trend,
    accepted: u32,
    rejected: u32,
}

impl<const N: usize> SensorChannel<N> {
    /// Create an unseeded channel
    pub fn new(quantity: Quantity, config: ConditioningConfig) -> ConditioningResult<Self> {
        let () = TrendBuffer::<N>::NONZERO_DEPTH;
        config.validate()?;

        Ok(Self {
            quantity,
            config,
            state: None,
            last_trend: Trend::Stable,
            accepted: 0,
            rejected: 0,
        })
    }

    /// Create an unseeded channel with the quantity's default config
    pub fn for_quantity(quantity: Quantity) -> ConditioningResult<Self> {
        Self::new(quantity, quantity.default_config())
    }

    /// Run one sampling cycle
    ///
    /// The first accepted sample seeds the filter and the trend buffer, so
    /// its reading has `filtered == rounded` and a stable trend.
    pub fn process(&mut self, raw: f32) -> ConditioningResult<ConditionedReading> {
        if !raw.is_finite() {
            self.rejected = self.rejected.saturating_add(1);
            log_warn!("{} channel rejected non-finite sample", self.quantity);
            return Err(ConditioningError::InvalidValue);
        }

        let rounded = round_to_decimals(raw, self.config.decimal_places);

        let conditioners = match self.state {
            Some(ref mut conditioners) => conditioners,
            None => {
                let seeded = Conditioners::seed(raw, rounded, &self.config)?;
                log_info!("{} channel seeded at {}", self.quantity, raw);
                self.state.insert(seeded)
            }
        };

        let filtered = conditioners.filter.update(rounded);
        conditioners.trend.add(raw);
        let trend = conditioners.trend.classify();

        if trend != self.last_trend {
            log_debug!("{} trend {} -> {}", self.quantity, self.last_trend, trend);
            self.last_trend = trend;
        }
        self.accepted = self.accepted.saturating_add(1);

        Ok(ConditionedReading {
            quantity: self.quantity,
            raw,
            rounded,
            filtered,
            trend,
        })
    }

    /// Drop all state; the next accepted sample seeds the channel again
    pub fn reset(&mut self) {
        self.state = None;
        self.last_trend = Trend::Stable;
        self.accepted = 0;
        self.rejected = 0;
    }

    /// Whether a first sample has been accepted
    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    /// Current filtered value, if seeded
    pub fn filtered(&self) -> Option<f32> {
        self.state.as_ref().map(|state| state.filter.value())
    }

    /// Current trend, if seeded
    pub fn trend(&self) -> Option<Trend> {
        self.state.as_ref().map(|state| state.trend.classify())
    }

    /// Trend buffer slots for diagnostics, if seeded
    pub fn snapshot(&self) -> Option<&[f32; N]> {
        self.state.as_ref().map(|state| state.trend.snapshot())
    }

    /// Trend buffer in oldest-to-newest order, if seeded
    pub fn history(&self) -> Option<heapless::Vec<f32, N>> {
        self.state.as_ref().map(|state| state.trend.chronological())
    }

    /// Number of samples accepted since creation or reset
    pub fn samples_accepted(&self) -> u32 {
        self.accepted
    }

    /// Number of non-finite samples rejected since creation or reset
    pub fn samples_rejected(&self) -> u32 {
        self.rejected
    }

    /// Channel configuration
    pub fn config(&self) -> &ConditioningConfig {
        &self.config
    }

    /// Measured quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature_channel() -> SensorChannel {
        SensorChannel::for_quantity(Quantity::Temperature).unwrap()
    }

    #[test]
    fn unseeded_channel_has_no_state() {
        let channel = temperature_channel();
        assert!(!channel.is_seeded());
        assert_eq!(channel.filtered(), None);
        assert_eq!(channel.trend(), None);
        assert!(channel.snapshot().is_none());
    }

    #[test]
    fn first_sample_seeds_everything() {
        let mut channel = temperature_channel();
        let reading = channel.process(21.34).unwrap();

        assert!(channel.is_seeded());
        assert_eq!(reading.raw, 21.34);
        assert_eq!(reading.rounded, 21.3);
        assert_eq!(reading.filtered, 21.3);
        assert_eq!(reading.trend, Trend::Stable);
        assert_eq!(channel.snapshot(), Some(&[21.34; TREND_DEPTH]));
    }

    #[test]
    fn rejects_non_finite_without_touching_state() {
        let mut channel = temperature_channel();
        channel.process(20.0).unwrap();
        let before = channel.clone();

        assert_eq!(channel.process(f32::NAN), Err(ConditioningError::InvalidValue));
        assert_eq!(channel.process(f32::NEG_INFINITY), Err(ConditioningError::InvalidValue));

        assert_eq!(channel.filtered(), before.filtered());
        assert_eq!(channel.snapshot(), before.snapshot());
        assert_eq!(channel.samples_accepted(), 1);
        assert_eq!(channel.samples_rejected(), 2);
    }

    #[test]
    fn nan_before_seed_keeps_channel_unseeded() {
        let mut channel = temperature_channel();
        assert!(channel.process(f32::NAN).is_err());
        assert!(!channel.is_seeded());

        let reading = channel.process(18.0).unwrap();
        assert_eq!(reading.filtered, 18.0);
    }

    #[test]
    fn reports_rising_trend() {
        let mut channel: SensorChannel<4> =
            SensorChannel::new(Quantity::Temperature, ConditioningConfig::default()).unwrap();

        channel.process(20.0).unwrap();
        channel.process(20.0).unwrap();
        channel.process(20.0).unwrap();
        let reading = channel.process(21.0).unwrap();

        assert_eq!(reading.trend, Trend::Rising);
        assert_eq!(channel.trend(), Some(Trend::Rising));
        assert!(reading.filtered > 20.0 && reading.filtered < 21.0);
    }

    #[test]
    fn filter_smooths_rounded_value() {
        let config = ConditioningConfig::new(0.5, 0.1, 0, 2000).unwrap();
        let mut channel: SensorChannel = SensorChannel::new(Quantity::Temperature, config).unwrap();

        channel.process(20.0).unwrap();
        let reading = channel.process(21.4).unwrap();

        // 20.0 + 0.5 * (21.0 - 20.0), not 20.0 + 0.5 * (21.4 - 20.0)
        assert_eq!(reading.rounded, 21.0);
        assert_eq!(reading.filtered, 20.5);
        // Trend still compares raw samples
        let history = channel.history().unwrap();
        assert_eq!(history.last(), Some(&21.4));
    }

    #[test]
    fn reset_returns_to_unseeded() {
        let mut channel = temperature_channel();
        channel.process(25.0).unwrap();
        channel.reset();

        assert!(!channel.is_seeded());
        assert_eq!(channel.samples_accepted(), 0);
        assert_eq!(channel.process(10.0).unwrap().filtered, 10.0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ConditioningConfig::default().with_decimal_places(12);
        assert!(matches!(
            SensorChannel::<10>::new(Quantity::Humidity, config),
            Err(ConditioningError::InvalidPrecision { places: 12, .. })
        ));
    }

    #[test]
    fn humidity_uses_wider_threshold() {
        let channel: SensorChannel = SensorChannel::for_quantity(Quantity::Humidity).unwrap();
        assert_eq!(channel.config().trend_threshold, ConditioningConfig::humidity().trend_threshold);
        assert_eq!(channel.quantity().unit(), "%");
    }
}
