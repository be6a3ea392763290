//! Signal conditioning for periodic sensor samples
//!
//! Turns a stream of raw temperature/humidity readings into what a display
//! or telemetry link actually wants: a smoothed value, a rounded value and
//! a direction arrow.
//!
//! Key constraints:
//! - No heap allocation, `no_std` without the `std` feature
//! - O(1) work per sample
//! - No global state; one owned [`SensorChannel`] per sensor
//!
//! ```no_run
//! use sensorcond_core::{Quantity, SensorChannel};
//!
//! let mut channel: SensorChannel = SensorChannel::for_quantity(Quantity::Temperature)?;
//!
//! // Once per sampling interval
//! let reading = channel.process(21.7)?;
//! // show(reading.filtered, reading.trend.arrow());
//! # Ok::<(), sensorcond_core::ConditioningError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod channel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod rounding;
pub mod trend;

// Public API
pub use channel::{ConditionedReading, Quantity, SensorChannel};
pub use config::ConditioningConfig;
pub use errors::{ConditioningError, ConditioningResult};
pub use filter::{Alpha, SmoothingFilter};
pub use rounding::round_to_decimals;
pub use trend::{DefaultTrendBuffer, Trend, TrendBuffer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
