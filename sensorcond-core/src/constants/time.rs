//! Time-Related Constants
//!
//! Sampling intervals used to size the trend window. The conditioning
//! components never read a clock; these values only feed configuration.

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Default sensor sampling interval (milliseconds).
///
/// DHT-class sensors cannot be read faster than every 2 seconds.
///
/// Source: DHT22 datasheet minimum sampling period
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 2000;

/// High-frequency sampling interval (milliseconds).
///
/// 10 Hz for channels that need fast trend response.
pub const HIGH_FREQ_SAMPLE_INTERVAL_MS: u32 = 100;

/// Low-frequency sampling interval (milliseconds).
///
/// One reading per minute for battery-powered monitoring.
pub const LOW_FREQ_SAMPLE_INTERVAL_MS: u32 = 60_000;
