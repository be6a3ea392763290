//! Trend Detection Constants
//!
//! The trend heuristic compares the newest sample against the one written
//! `TREND_DEPTH` samples earlier. Its sensitivity is the product of depth
//! and sampling interval:
//!
//! ```text
//! window = TREND_DEPTH × sample_interval
//!        = 10 × 2 s = 20 s   (default)
//!        = 10 × 100 ms = 1 s (high-frequency sampling)
//! ```
//!
//! A fast sampling rate with a large depth reacts slowly; a fast rate with a
//! small depth sees only noise. The threshold must sit above the sensor
//! read noise over that window.

/// Default number of samples held by a trend buffer.
///
/// Source: Inherited from the first display firmware, no derivation beyond
/// giving a ~20 s window at the default sampling interval
pub const TREND_DEPTH: usize = 10;

/// Minimum temperature change over the window to report a direction (°C).
///
/// Matches the 0.1°C display resolution so a displayed change always
/// agrees with the trend arrow.
pub const TREND_THRESHOLD_C: f32 = 0.1;

/// Minimum humidity change over the window to report a direction (%RH).
///
/// Humidity sensors are noisier (±2% typical), so the threshold is wider.
pub const TREND_THRESHOLD_PCT: f32 = 0.5;
