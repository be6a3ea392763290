//! Constants for Sensorcond Core
//!
//! Centralized defaults for the conditioning components. Every value that
//! shapes filter or trend behaviour is defined here with its unit and
//! origin, and every one of them is only a default: the components take the
//! actual values as parameters.
//!
//! ## Organization
//!
//! - **Filter**: smoothing coefficient and fallback seed
//! - **Trend**: buffer depth and direction threshold
//! - **Rounding**: display precision limits
//! - **Time**: sampling intervals and unit conversions
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the constant name
//! 3. Tune trend depth and sampling interval together, never one alone

/// Exponential smoothing defaults.
pub mod filter;

/// Trend buffer depth and threshold defaults.
pub mod trend;

/// Rounding precision limits.
pub mod rounding;

/// Time-related constants for sampling intervals.
pub mod time;

pub use filter::{DEFAULT_ALPHA, DEFAULT_SEED_C, RESPONSIVE_ALPHA, HEAVY_ALPHA};
pub use trend::{TREND_DEPTH, TREND_THRESHOLD_C, TREND_THRESHOLD_PCT};
pub use rounding::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use time::{MS_PER_SECOND, DEFAULT_SAMPLE_INTERVAL_MS};
